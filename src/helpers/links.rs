//! Outbound link helpers
//!
//! The contact URIs are static configuration; opening them goes through the
//! system URL handler and never affects view state.

use crate::error::Result;

/// Open a URL with the system handler
pub fn open_external(url: &str) -> Result<()> {
    open::that(url)?;
    Ok(())
}

/// Build a `mailto:` URI for an address
pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_prefixes_the_scheme() {
        assert_eq!(mailto("raiyanriz11@gmail.com"), "mailto:raiyanriz11@gmail.com");
    }
}
