use std::ops::Deref;

use derive_more::Display;

/// A string that has been escaped for direct inclusion in a latex document.
#[derive(Debug, Clone, Display, PartialEq, Eq)]
#[display("{_0}")]
pub struct LatexString(String);

impl LatexString {
    #[must_use]
    pub fn escape(value: &str) -> Self {
        Self(v_latexescape::escape(value).to_string())
    }
}

impl Deref for LatexString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape() {
        assert_eq!(&*LatexString::escape("R$ 100 & 5% #1"), "R\\$ 100 \\& 5\\% \\#1");
        assert_eq!(&*LatexString::escape("Sem descrição"), "Sem descrição");
    }
}
