use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::DeriveInput;

/// #[derive(Selectable)] emits an empty impl; every method is a default.
pub fn expand_derive_selectable(input: DeriveInput) -> TokenStream2 {
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::tola_branch::Selectable for #ident #ty_generics #where_clause {}
    }
}
