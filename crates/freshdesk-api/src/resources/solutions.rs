//! Knowledge base: solution categories, folders and articles.

use super::capabilities::{CategoryScoped, Create, Delete, FolderScoped, List, Update, View};
use super::Resource;

resource! {
    /// Solution categories.
    Solutions => "/solutions/categories"
}

impl List for Solutions {}
impl Create for Solutions {}
impl View for Solutions {}
impl Update for Solutions {}
impl Delete for Solutions {}

resource! {
    /// Solution folders, listed and created per category.
    Folders => "/solutions/folders"
}

impl CategoryScoped for Folders {
    const CATEGORY_ENDPOINT: &'static str = Solutions::ENDPOINT;
}
impl View for Folders {}
impl Update for Folders {}
impl Delete for Folders {}

resource! {
    /// Solution articles, listed and created per folder.
    Articles => "/solutions/articles"
}

impl FolderScoped for Articles {
    const FOLDER_ENDPOINT: &'static str = Folders::ENDPOINT;
}
impl View for Articles {}
impl Update for Articles {}
impl Delete for Articles {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_endpoints() {
        assert_eq!(Folders::CATEGORY_ENDPOINT, "/solutions/categories");
        assert_eq!(Articles::FOLDER_ENDPOINT, "/solutions/folders");
    }
}
