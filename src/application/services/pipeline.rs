use crate::application::ports::TextTransform;

/// An ordered chain of transforms. Each step receives the previous step's output.
pub struct Pipeline {
    steps: Vec<Box<dyn TextTransform>>,
}

impl Pipeline {
    pub fn compose(steps: Vec<Box<dyn TextTransform>>) -> Self {
        Self { steps }
    }

    pub fn run(&self, text: &str) -> String {
        self.steps
            .iter()
            .fold(text.to_string(), |current, step| step.apply(&current))
    }

    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("steps", &self.step_names())
            .finish()
    }
}
