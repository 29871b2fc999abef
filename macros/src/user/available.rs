use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;

use crate::common::AvailableInput;

/// Expand to a block producing `Availability<'static>`.
///
/// Requirements live in a block-local `const`, so the slice is `'static`.
pub fn expand_available(input: AvailableInput) -> TokenStream2 {
    let requirements = input.entries.iter().map(|entry| {
        let variant = &entry.variant;
        let major = Literal::u64_unsuffixed(entry.major);
        let minor = Literal::u64_unsuffixed(entry.minor);
        quote! {
            ::tola_branch::platform::MinimumVersion::at(
                ::tola_branch::platform::Platform::#variant,
                ::tola_branch::platform::Version::new(#major, #minor),
            )
        }
    });
    let wildcard = input.wildcard;

    quote! {
        {
            const REQUIREMENTS: &[::tola_branch::platform::MinimumVersion] = &[
                #(#requirements,)*
            ];
            ::tola_branch::platform::Availability::new(REQUIREMENTS, #wildcard)
        }
    }
}
