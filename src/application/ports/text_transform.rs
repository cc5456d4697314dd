/// A pure string-to-string step that can be chained into a pipeline.
pub trait TextTransform: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(&self, text: &str) -> String;
}
