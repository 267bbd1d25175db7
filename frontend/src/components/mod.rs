pub mod about;
pub mod effects;
pub mod faq_section;
pub mod features;
pub mod footer;
pub mod image_section;
pub mod nav_bar;

/// Whether a `/assets/...` URL maps to a file trunk will copy into the build.
#[cfg(test)]
pub(crate) fn asset_on_disk(url: &str) -> bool {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(url.trim_start_matches('/'))
        .is_file()
}
