//! Upload limits per entity kind

pub const MB: u64 = 1024 * 1024;
pub const GIB: u64 = 1024 * 1024 * 1024;

/// Caps applied to a file selection before anything is uploaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileLimits {
    pub max_files: usize,
    /// `None` means no per-file ceiling
    pub max_bytes: Option<u64>,
    /// Human readable ceiling, e.g. "5MB"
    pub size_label: &'static str,
    /// Plural noun for the count message ("images", "files")
    pub unit: &'static str,
    /// Singular noun for the size message ("image", "file")
    pub unit_singular: &'static str,
    pub scope: &'static str,
}

pub const CATEGORY_COVER: FileLimits = FileLimits {
    max_files: 1,
    max_bytes: Some(5 * MB),
    size_label: "5MB",
    unit: "image",
    unit_singular: "image",
    scope: "category",
};

pub const SUBCATEGORY_IMAGES: FileLimits = FileLimits {
    max_files: 5,
    max_bytes: Some(5 * MB),
    size_label: "5MB",
    unit: "images",
    unit_singular: "image",
    scope: "subcategory",
};

pub const GALLERY_IMAGES: FileLimits = FileLimits {
    max_files: 15,
    max_bytes: None,
    size_label: "",
    unit: "images",
    unit_singular: "image",
    scope: "gallery item",
};

pub const CATALOG_FILES: FileLimits = FileLimits {
    max_files: 5,
    max_bytes: Some(GIB),
    size_label: "1GB",
    unit: "files",
    unit_singular: "file",
    scope: "catalog",
};

pub const CATALOG_COVER: FileLimits = FileLimits {
    max_files: 1,
    max_bytes: Some(GIB),
    size_label: "1GB",
    unit: "image",
    unit_singular: "image",
    scope: "catalog",
};

impl FileLimits {
    pub fn allows_size(&self, size: u64) -> bool {
        self.max_bytes.map_or(true, |max| size <= max)
    }
}
