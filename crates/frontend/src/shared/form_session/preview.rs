use crate::shared::http::LocalFile;
use std::rc::Rc;

/// Source of local preview URLs
pub trait PreviewFactory: 'static {
    type File: LocalFile;

    /// `None` when the browser refused to create a URL
    fn acquire(&self, file: &Self::File) -> Option<String>;

    fn release(&self, url: &str);
}

/// A preview URL released exactly once, when the handle is dropped
pub struct PreviewHandle<P: PreviewFactory> {
    url: String,
    factory: Rc<P>,
}

impl<P: PreviewFactory> PreviewHandle<P> {
    pub fn acquire(factory: &Rc<P>, file: &P::File) -> Option<Self> {
        let url = factory.acquire(file)?;
        Some(Self {
            url,
            factory: Rc::clone(factory),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<P: PreviewFactory> Drop for PreviewHandle<P> {
    fn drop(&mut self) {
        log::trace!("releasing preview {}", self.url);
        self.factory.release(&self.url);
    }
}

/// Object URLs (`blob:`) created by the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPreviews;

impl PreviewFactory for BrowserPreviews {
    type File = web_sys::File;

    fn acquire(&self, file: &web_sys::File) -> Option<String> {
        web_sys::Url::create_object_url_with_blob(file)
            .map_err(|e| log::warn!("preview for {} failed: {:?}", file.name(), e))
            .ok()
    }

    fn release(&self, url: &str) {
        if let Err(e) = web_sys::Url::revoke_object_url(url) {
            log::warn!("revoke {} failed: {:?}", url, e);
        }
    }
}

#[cfg(test)]
pub mod testing {
    use super::PreviewFactory;
    use crate::shared::http::testing::TestFile;
    use std::cell::RefCell;

    /// Hands out `preview:<n>` URLs and records releases
    #[derive(Default)]
    pub struct CountingPreviews {
        acquired: RefCell<Vec<String>>,
        released: RefCell<Vec<String>>,
    }

    impl CountingPreviews {
        pub fn acquired(&self) -> usize {
            self.acquired.borrow().len()
        }

        pub fn released(&self) -> Vec<String> {
            self.released.borrow().clone()
        }

        pub fn live(&self) -> usize {
            self.acquired() - self.released.borrow().len()
        }
    }

    impl PreviewFactory for CountingPreviews {
        type File = TestFile;

        fn acquire(&self, _file: &TestFile) -> Option<String> {
            let url = format!("preview:{}", self.acquired.borrow().len());
            self.acquired.borrow_mut().push(url.clone());
            Some(url)
        }

        fn release(&self, url: &str) {
            assert!(
                !self.released.borrow().iter().any(|u| u == url),
                "{} released twice",
                url
            );
            self.released.borrow_mut().push(url.to_string());
        }
    }
}
