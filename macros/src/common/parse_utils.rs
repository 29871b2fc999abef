//! Common parsing utilities
//!
//! Input grammar for `available!`:
//!
//! ```text
//! available!( platform version (, platform version)* (, *)? )
//! version  := INT | FLOAT      // 17 or 14.2
//! ```

use syn::{
    parse::{Parse, ParseStream},
    Ident, Lit, Token,
};

/// Lowercase platform names and their `Platform` variants.
pub const PLATFORMS: &[(&str, &str)] = &[
    ("ios", "Ios"),
    ("macos", "MacOs"),
    ("tvos", "TvOs"),
    ("watchos", "WatchOs"),
    ("visionos", "VisionOs"),
    ("android", "Android"),
    ("windows", "Windows"),
    ("linux", "Linux"),
    ("freebsd", "FreeBsd"),
];

fn platform_variant(name: &Ident) -> syn::Result<Ident> {
    let wanted = name.to_string();
    PLATFORMS
        .iter()
        .find(|(lower, _)| *lower == wanted)
        .map(|(_, variant)| Ident::new(variant, name.span()))
        .ok_or_else(|| {
            let known: Vec<&str> = PLATFORMS.iter().map(|(lower, _)| *lower).collect();
            syn::Error::new(
                name.span(),
                format!("unknown platform `{wanted}`, expected one of: {}", known.join(", ")),
            )
        })
}

// =============================================================================
// Platform Entry: `ios 17` / `macos 14.2`
// =============================================================================

/// One `platform version` pair.
pub struct PlatformEntry {
    pub name: Ident,
    pub variant: Ident,
    pub major: u64,
    pub minor: u64,
}

impl Parse for PlatformEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let variant = platform_variant(&name)?;

        let lit: Lit = input.parse()?;
        let (major, minor) = match &lit {
            Lit::Int(int) if int.suffix().is_empty() => (int.base10_parse::<u64>()?, 0),
            Lit::Float(float) if float.suffix().is_empty() => {
                let digits = float.base10_digits();
                match digits.split_once('.') {
                    Some((major, minor)) if !minor.is_empty() => {
                        let parse = |s: &str| {
                            s.parse::<u64>().map_err(|_| {
                                syn::Error::new(lit.span(), "expected `major` or `major.minor`")
                            })
                        };
                        (parse(major)?, parse(minor)?)
                    }
                    _ => {
                        return Err(syn::Error::new(lit.span(), "expected `major` or `major.minor`"));
                    }
                }
            }
            _ => return Err(syn::Error::new(lit.span(), "expected a version like `17` or `14.2`")),
        };

        Ok(PlatformEntry { name, variant, major, minor })
    }
}

// =============================================================================
// Full Input
// =============================================================================

/// Parsed `available!` arguments.
pub struct AvailableInput {
    pub entries: Vec<PlatformEntry>,
    pub wildcard: bool,
}

impl Parse for AvailableInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut entries: Vec<PlatformEntry> = Vec::new();
        let mut wildcard = false;

        while !input.is_empty() {
            if input.peek(Token![*]) {
                let star: Token![*] = input.parse()?;
                wildcard = true;
                if input.peek(Token![,]) {
                    input.parse::<Token![,]>()?;
                }
                if !input.is_empty() {
                    return Err(syn::Error::new(star.spans[0], "`*` must be the last entry"));
                }
                break;
            }

            let entry: PlatformEntry = input.parse()?;
            if entries.iter().any(|e| e.variant == entry.variant) {
                return Err(syn::Error::new(
                    entry.name.span(),
                    format!("platform `{}` listed twice", entry.name),
                ));
            }
            entries.push(entry);

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        if entries.is_empty() {
            return Err(input.error("available! needs at least one `platform version` entry"));
        }

        Ok(AvailableInput { entries, wildcard })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_and_wildcard() {
        let parsed: AvailableInput = syn::parse_str("ios 17, macos 14.2, *").unwrap();
        assert!(parsed.wildcard);
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.entries[0].variant, "Ios");
        assert_eq!((parsed.entries[0].major, parsed.entries[0].minor), (17, 0));
        assert_eq!(parsed.entries[1].variant, "MacOs");
        assert_eq!((parsed.entries[1].major, parsed.entries[1].minor), (14, 2));
    }

    #[test]
    fn trailing_comma_without_wildcard() {
        let parsed: AvailableInput = syn::parse_str("android 14,").unwrap();
        assert!(!parsed.wildcard);
        assert_eq!(parsed.entries[0].variant, "Android");
    }

    #[test]
    fn rejects_bad_input() {
        assert!(syn::parse_str::<AvailableInput>("").is_err());
        assert!(syn::parse_str::<AvailableInput>("*").is_err());
        assert!(syn::parse_str::<AvailableInput>("beos 5").is_err());
        assert!(syn::parse_str::<AvailableInput>("ios 17, ios 18").is_err());
        assert!(syn::parse_str::<AvailableInput>("ios 17, *, macos 14").is_err());
        assert!(syn::parse_str::<AvailableInput>("ios \"17\"").is_err());
        assert!(syn::parse_str::<AvailableInput>("ios 17u8").is_err());
    }
}
