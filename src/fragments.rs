use core::fmt;

use arrayvec::ArrayVec;

/// Maximum number of fragments a surface form is assembled from.
const CAPACITY: usize = 6;

/// A surface form assembled from borrowed string fragments with fixed size
/// storage.
#[derive(Default, Clone)]
pub struct Fragments<'a> {
    storage: ArrayVec<&'a str, CAPACITY>,
}

impl<'a> Fragments<'a> {
    /// Construct fragments from the given strings, skipping empty ones.
    pub fn new<I>(strings: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut this = Self::default();
        this.extend(strings);
        this
    }

    /// Push the given string onto storage.
    ///
    /// # Panics
    ///
    /// Panics if more fragments than the fixed capacity are pushed, which
    /// no rule does.
    pub fn push(&mut self, string: &'a str) {
        if !string.is_empty() {
            assert!(!self.storage.is_full(), "Capacity overflow");
            self.storage.push(string);
        }
    }

    /// Append suffixes to a copy of these fragments.
    pub fn concat<I>(&self, strings: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut this = self.clone();
        this.extend(strings);
        this
    }
}

impl<'a> Extend<&'a str> for Fragments<'a> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for string in iter {
            self.push(string);
        }
    }
}

impl fmt::Display for Fragments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in &self.storage {
            string.fmt(f)?;
        }

        Ok(())
    }
}

impl fmt::Debug for Fragments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.storage.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Fragments;

    #[test]
    fn skips_empty_fragments() {
        let fragments = Fragments::new(["食べ", "", "ます"]);
        assert_eq!(format!("{fragments:?}"), r#"["食べ", "ます"]"#);
        assert_eq!(fragments.to_string(), "食べます");
    }

    #[test]
    fn concat_leaves_original() {
        let base = Fragments::new(["飲", "ま"]);
        let negative = base.concat(["ない"]);
        assert_eq!(base.to_string(), "飲ま");
        assert_eq!(negative.to_string(), "飲まない");
        assert_eq!(Fragments::default().to_string(), "");
    }
}
