use log::trace;
use regex::Regex;
use std::{path::Path, sync::LazyLock};

use crate::constants::{SCRIPT_EXTENSIONS, STYLESHEET_EXTENSIONS, TYPED_SCRIPT_EXTENSIONS};

/// `@import (reference) url("x")`: quoted path in group 4 (single) or 5 (double).
static STYLESHEET_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@import (\([a-z,\s]*\)\s*)?(url\()?('([^']+)'|"([^"]+)")"#)
        .expect("stylesheet import pattern")
});

/// `import x from "y";` or `import "y";`: path in group 2. The trailing `;` is required.
static TYPED_SCRIPT_IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import(.*from)?\s+["'](.*)["'];"#).expect("typed-script import pattern")
});

/// `require("x")` not preceded by an identifier character or `.`.
static SCRIPT_REQUIRE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)(?:^|[^A-Za-z0-9_$.])require\((?:'([^']+)'|"([^"]+)")\)"#)
        .expect("script require pattern")
});

/// Source language of a file, picked once from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `.less`
    Stylesheet,
    /// `.ts`, including `.d.ts`
    TypedScript,
    /// Everything else
    Script,
}

impl Dialect {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("less") => Dialect::Stylesheet,
            Some("ts") => Dialect::TypedScript,
            _ => Dialect::Script,
        }
    }

    /// Extensions probed when resolving this dialect's specifiers.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Dialect::Stylesheet => STYLESHEET_EXTENSIONS,
            Dialect::TypedScript => TYPED_SCRIPT_EXTENSIONS,
            Dialect::Script => SCRIPT_EXTENSIONS,
        }
    }

    /// Raw specifiers matched by this dialect's own pattern, in source order.
    ///
    /// Stylesheet imports pointing at a remote resource are skipped and the
    /// default extension is appended to extensionless ones. Typed-script
    /// returns `import` statements only; its `require` calls come from
    /// [`Dialect::Script`].
    pub fn specifiers(self, source: &str) -> Vec<String> {
        let specs: Vec<String> = match self {
            Dialect::Stylesheet => STYLESHEET_IMPORT
                .captures_iter(source)
                .filter_map(|caps| caps.get(4).or_else(|| caps.get(5)))
                .map(|m| m.as_str())
                .filter(|path| {
                    let remote = path.contains("://");
                    if remote {
                        trace!("Skipping remote stylesheet import '{}'", path);
                    }
                    !remote
                })
                .map(|path| {
                    if Path::new(path).extension().is_none() {
                        format!("{}{}", path, STYLESHEET_EXTENSIONS[0])
                    } else {
                        path.to_string()
                    }
                })
                .collect(),
            Dialect::TypedScript => TYPED_SCRIPT_IMPORT
                .captures_iter(source)
                .filter_map(|caps| caps.get(2))
                .map(|m| m.as_str().to_string())
                .collect(),
            Dialect::Script => SCRIPT_REQUIRE
                .captures_iter(source)
                .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
                .map(|m| m.as_str().to_string())
                .collect(),
        };
        trace!("Matched {} {:?} specifiers", specs.len(), self);
        specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_path() {
        assert_eq!(Dialect::for_path(Path::new("a/site.less")), Dialect::Stylesheet);
        assert_eq!(Dialect::for_path(Path::new("a/app.ts")), Dialect::TypedScript);
        assert_eq!(Dialect::for_path(Path::new("a/globals.d.ts")), Dialect::TypedScript);
        assert_eq!(Dialect::for_path(Path::new("a/app.js")), Dialect::Script);
        assert_eq!(Dialect::for_path(Path::new("a/app.tsx")), Dialect::Script);
        assert_eq!(Dialect::for_path(Path::new("a/Makefile")), Dialect::Script);
    }

    #[test]
    fn test_extensions() {
        assert_eq!(Dialect::Stylesheet.extensions(), &[".less"]);
        assert_eq!(Dialect::TypedScript.extensions(), &[".ts", ".d.ts"]);
        assert_eq!(Dialect::Script.extensions(), &[".js"]);
    }

    #[test]
    fn test_stylesheet_quotes() {
        let src = "@import 'a';\n@import \"b.css\";";
        assert_eq!(Dialect::Stylesheet.specifiers(src), vec!["a.less", "b.css"]);
    }

    #[test]
    fn test_stylesheet_url_and_options() {
        let src = "@import url('grid');\n@import (reference, optional) \"mixins\";\n\
                   @import (css) url(\"print.css\");";
        assert_eq!(
            Dialect::Stylesheet.specifiers(src),
            vec!["grid.less", "mixins.less", "print.css"]
        );
    }

    #[test]
    fn test_stylesheet_skips_remote() {
        let src = "@import \"https://example.com/a.css\";\n@import 'local';";
        assert_eq!(Dialect::Stylesheet.specifiers(src), vec!["local.less"]);
    }

    #[test]
    fn test_stylesheet_keeps_directories() {
        let src = "@import \"../theme/colors\";";
        assert_eq!(Dialect::Stylesheet.specifiers(src), vec!["../theme/colors.less"]);
    }

    #[test]
    fn test_stylesheet_requires_single_space() {
        assert!(Dialect::Stylesheet.specifiers("@import\"a\";").is_empty());
    }

    #[test]
    fn test_typed_script_imports() {
        let src = "import { a } from './a';\nimport * as b from \"./b\";\nimport './side';";
        assert_eq!(Dialect::TypedScript.specifiers(src), vec!["./a", "./b", "./side"]);
    }

    #[test]
    fn test_typed_script_requires_semicolon() {
        assert!(Dialect::TypedScript.specifiers("import { a } from './a'").is_empty());
    }

    #[test]
    fn test_typed_script_ignores_require() {
        assert!(Dialect::TypedScript.specifiers("const a = require('./a');").is_empty());
    }

    #[test]
    fn test_script_requires() {
        let src = "var a = require('./a');\nvar b = require(\"b\");\nfoo(require('./c'));";
        assert_eq!(Dialect::Script.specifiers(src), vec!["./a", "b", "./c"]);
    }

    #[test]
    fn test_script_require_at_line_start() {
        assert_eq!(Dialect::Script.specifiers("require('./a');"), vec!["./a"]);
    }

    #[test]
    fn test_script_rejects_lookalikes() {
        let src = "myObj.require(\"x\");\nmyrequire('y');\n_require('z');\n$require('w');";
        assert!(Dialect::Script.specifiers(src).is_empty());
    }

    #[test]
    fn test_script_rejects_computed() {
        let src = "require(name);\nrequire('./' + name);\nrequire(`./${name}`);";
        assert!(Dialect::Script.specifiers(src).is_empty());
    }
}
