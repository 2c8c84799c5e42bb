use crate::registry::ProcessRegistry;

/// Whether `candidate` is a well-formed absolute URL.
pub fn is_valid_url(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    !trimmed.is_empty() && reqwest::Url::parse(trimmed).is_ok()
}

/// Draft buffer for the node URL, separate from the committed URL.
#[derive(Debug, Clone, Default)]
pub struct UrlEditor {
    draft: String,
}

impl UrlEditor {
    /// Start editing from the committed URL.
    pub fn new(committed: &str) -> Self {
        Self {
            draft: committed.to_string(),
        }
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Save is enabled only for a non-empty, well-formed absolute URL.
    pub fn can_save(&self) -> bool {
        is_valid_url(&self.draft)
    }

    /// The value to commit, or `None` while saving is disabled.
    pub fn commit_value(&self) -> Option<String> {
        self.can_save().then(|| self.draft.trim().to_string())
    }
}

/// Draft buffer for the add-process form.
#[derive(Debug, Clone, Default)]
pub struct ProcessAdder {
    draft: String,
}

impl ProcessAdder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Drives the "Process ID already exists" message.
    pub fn is_duplicate(&self, registry: &ProcessRegistry) -> bool {
        registry.contains(&self.draft)
    }

    /// Add is disabled for an empty draft or an id that is already tracked.
    pub fn can_add(&self, registry: &ProcessRegistry) -> bool {
        !self.draft.trim().is_empty() && !self.is_duplicate(registry)
    }

    /// Hand out the draft and clear the buffer, or `None` while adding is disabled.
    pub fn take(&mut self, registry: &ProcessRegistry) -> Option<String> {
        if !self.can_add(registry) {
            return None;
        }
        Some(std::mem::take(&mut self.draft))
    }
}
