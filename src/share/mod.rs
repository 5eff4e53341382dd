use crate::domain::Article;
use crate::errors::{NewsError, NewsResult};

/// Title used when no article is selected.
const FALLBACK_TITLE: &str = "ComMarília";

/// Text used when no article is selected.
const FALLBACK_TEXT: &str = "Portal de notícias de Marília";

/// Message returned to the user after the clipboard fallback.
const CLIPBOARD_MESSAGE: &str = "Link copiado para a área de transferência!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    /// Build a request for the given article, falling back to the portal
    /// identity when none is selected.
    pub fn for_article(article: Option<&Article>, url: impl Into<String>) -> Self {
        Self {
            title: article
                .map(|a| a.title.clone())
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            text: article
                .map(|a| a.excerpt.clone())
                .unwrap_or_else(|| FALLBACK_TEXT.to_string()),
            url: url.into(),
        }
    }
}

/// What happened to a share request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// The platform took over the share flow.
    Shared,
    /// The link was copied instead; the message should be shown to the user.
    CopiedToClipboard(String),
}

/// Environment capability for sharing a link.
#[cfg_attr(test, mockall::automock)]
pub trait ShareProvider: Send + Sync {
    fn is_available(&self) -> bool;
    fn share(&self, request: &ShareRequest) -> NewsResult<ShareOutcome>;
}

/// Hands the link to the platform's default handler.
pub struct NativeShare;

impl ShareProvider for NativeShare {
    fn is_available(&self) -> bool {
        true
    }

    fn share(&self, request: &ShareRequest) -> NewsResult<ShareOutcome> {
        open::that(&request.url).map_err(|e| NewsError::Share(e.to_string()))?;
        Ok(ShareOutcome::Shared)
    }
}

/// Copies the link to the system clipboard and reports it synchronously.
pub struct ClipboardShare;

impl ShareProvider for ClipboardShare {
    fn is_available(&self) -> bool {
        arboard::Clipboard::new().is_ok()
    }

    fn share(&self, request: &ShareRequest) -> NewsResult<ShareOutcome> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| NewsError::Clipboard(e.to_string()))?;
        clipboard
            .set_text(request.url.clone())
            .map_err(|e| NewsError::Clipboard(e.to_string()))?;

        Ok(ShareOutcome::CopiedToClipboard(CLIPBOARD_MESSAGE.to_string()))
    }
}

/// Dispatches to the native provider when the environment supports it,
/// otherwise to the fallback.
pub struct ShareService {
    native: Box<dyn ShareProvider>,
    fallback: Box<dyn ShareProvider>,
}

impl ShareService {
    pub fn new(native: Box<dyn ShareProvider>, fallback: Box<dyn ShareProvider>) -> Self {
        Self { native, fallback }
    }

    pub fn share(&self, request: &ShareRequest) -> NewsResult<ShareOutcome> {
        if self.native.is_available() {
            self.native.share(request)
        } else {
            self.fallback.share(request)
        }
    }
}

impl Default for ShareService {
    fn default() -> Self {
        Self::new(Box::new(NativeShare), Box::new(ClipboardShare))
    }
}
