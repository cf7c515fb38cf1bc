/// A dependency name as written in source text, classified by how it is anchored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    pub request: String,
    pub kind: SpecKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecKind {
    /// Rooted at the filesystem root (`/abs/path`)
    Absolute,
    /// Anchored to the importing file's directory (`./x`, `../x`, `.`, `..`)
    Relative,
    /// A package name looked up under the module-install directory
    Bare,
}

impl Specifier {
    pub fn parse(request: &str) -> Self {
        let kind = if request.starts_with('/') {
            SpecKind::Absolute
        } else if request == "."
            || request == ".."
            || request.starts_with("./")
            || request.starts_with("../")
        {
            SpecKind::Relative
        } else {
            SpecKind::Bare
        };
        Specifier { request: request.to_string(), kind }
    }
}
