use std::sync::LazyLock;

use tiktoken_rs::{CoreBPE, cl100k_base};

static CL100K: LazyLock<CoreBPE> =
    LazyLock::new(|| cl100k_base().expect("cl100k_base ranks are bundled with tiktoken-rs"));

/// Number of `cl100k_base` tokens in `text`.
///
/// Special-token markers such as `<|endoftext|>` are encoded as ordinary text, so
/// client input never yields control tokens.
pub fn count_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    CL100K.encode_ordinary(text).len()
}
