//! View state machines for fetched record lists and individual images.

/// State of a page-level fetch.
///
/// ```text
/// Loading ──resolve──> Empty | Populated
///    │
///    └──fail──> Failed ──retry──> Loading
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Empty,
    Populated(Vec<T>),
}

impl<T> FetchState<T> {
    /// Resolve a completed read. Reads never fail visibly, so a resolved
    /// fetch is either empty or populated.
    pub fn resolve(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Populated(items)
        }
    }

    /// Record a failure of the request that carries the fetch result.
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Manual retry. Only a failed fetch re-enters `Loading`; resolved
    /// states are terminal.
    pub fn retry(self) -> Self {
        match self {
            Self::Failed(_) => Self::Loading,
            other => other,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Stable name used for `data-state` attributes.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Failed(_) => "error",
            Self::Empty => "empty",
            Self::Populated(_) => "populated",
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            Self::Populated(items) => items,
            _ => &[],
        }
    }
}

/// Load state of one rendered image, independent of the record fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl ImageLoadState {
    /// The image finished loading. Settled states do not change.
    pub fn on_load(self) -> Self {
        match self {
            Self::Pending => Self::Loaded,
            settled => settled,
        }
    }

    /// The image failed to load. Settled states do not change.
    pub fn on_error(self) -> Self {
        match self {
            Self::Pending => Self::Failed,
            settled => settled,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Loaded => "loaded",
            Self::Failed => "failed",
        }
    }
}
