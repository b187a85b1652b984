//! Tag tokens handed over by the lexer
//!
//! The lexer owns tokenization; this crate only needs the captured text of
//! an opening or self-closing tag and where it sits in the document.

/// Anything that can describe a lexed tag
pub trait TagSymbol {
    /// Raw tag text including delimiters, e.g. `<div class="x">`
    fn text(&self) -> &str;
    /// Start offset of the tag in the document
    fn start(&self) -> usize;
    /// End offset (exclusive) of the tag in the document
    fn end(&self) -> usize;
}

/// Owned tag token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagToken {
    text: String,
    start: usize,
    end: usize,
}

impl TagToken {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        TagToken {
            text: text.into(),
            start,
            end,
        }
    }
}

impl TagSymbol for TagToken {
    #[inline]
    fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    fn start(&self) -> usize {
        self.start
    }

    #[inline]
    fn end(&self) -> usize {
        self.end
    }
}

impl<T: TagSymbol + ?Sized> TagSymbol for &T {
    fn text(&self) -> &str {
        (**self).text()
    }

    fn start(&self) -> usize {
        (**self).start()
    }

    fn end(&self) -> usize {
        (**self).end()
    }
}
