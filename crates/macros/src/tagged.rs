//! Tagged derive macro implementation.

use std::collections::HashMap;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields};

use crate::case::to_snake_case;

pub fn derive_tagged(input: &DeriveInput) -> TokenStream {
	let enum_name = &input.ident;
	let vis = &input.vis;

	let Data::Enum(data) = &input.data else {
		return syn::Error::new_spanned(input, "Tagged can only be derived for enums")
			.to_compile_error();
	};

	if !input.generics.params.is_empty() {
		return syn::Error::new_spanned(&input.generics, "Tagged does not support generic enums")
			.to_compile_error();
	}

	if data.variants.is_empty() {
		return syn::Error::new_spanned(input, "Tagged requires at least one alternative")
			.to_compile_error();
	}

	let mut visitor = format_ident!("{}Visitor", enum_name);
	for attr in input.attrs.iter().filter(|a| a.path().is_ident("tagged")) {
		if let Err(e) = attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("visitor") {
				visitor = meta.value()?.parse()?;
				Ok(())
			} else {
				Err(meta.error("unknown tagged attribute"))
			}
		}) {
			return e.to_compile_error();
		}
	}

	let mut names = Vec::new();
	let mut tag_arms = Vec::new();
	let mut methods = Vec::new();
	let mut dispatch_arms = Vec::new();
	let mut handlers: HashMap<String, &syn::Ident> = HashMap::new();

	for (tag, variant) in data.variants.iter().enumerate() {
		let variant_name = &variant.ident;
		let name = variant_name.to_string();
		let handler = format!("visit_{}", to_snake_case(&name));
		if let Some(previous) = handlers.insert(handler.clone(), variant_name) {
			return syn::Error::new_spanned(
				variant,
				format!("alternatives `{previous}` and `{name}` both map to handler `{handler}`"),
			)
			.to_compile_error();
		}
		let method = format_ident!("{}", handler);
		let doc = format!("Handles the `{name}` alternative. Defaults to [`Self::fallback`].");

		tag_arms.push(quote! { Self::#variant_name { .. } => #tag });

		match &variant.fields {
			Fields::Unit => {
				methods.push(quote! {
					#[doc = #doc]
					fn #method(&mut self) -> Self::Output {
						self.fallback(#name)
					}
				});
				dispatch_arms.push(quote! { Self::#variant_name => visitor.#method() });
			}
			Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
				let ty = &fields.unnamed[0].ty;
				methods.push(quote! {
					#[doc = #doc]
					fn #method(&mut self, value: &#ty) -> Self::Output {
						let _ = value;
						self.fallback(#name)
					}
				});
				dispatch_arms.push(quote! { Self::#variant_name(value) => visitor.#method(value) });
			}
			_ => {
				return syn::Error::new_spanned(
					variant,
					"Tagged alternatives must carry exactly one unnamed field or none",
				)
				.to_compile_error();
			}
		}

		names.push(name);
	}

	let trait_doc = format!("Closed-set visitor over [`{enum_name}`] alternatives.");

	let expanded = quote! {
		impl ::polyslot::Tagged for #enum_name {
			const ALTERNATIVES: &'static [&'static str] = &[#(#names),*];

			fn tag(&self) -> usize {
				match self {
					#(#tag_arms,)*
				}
			}
		}

		#[doc = #trait_doc]
		#vis trait #visitor {
			/// Value produced by every handler.
			type Output;

			/// Handles any alternative without a specific handler.
			fn fallback(&mut self, alternative: &'static str) -> Self::Output;

			#(#methods)*
		}

		impl #enum_name {
			/// Invokes exactly one visitor method: the active alternative's handler.
			#vis fn dispatch<V: #visitor>(&self, visitor: &mut V) -> V::Output {
				match self {
					#(#dispatch_arms,)*
				}
			}
		}
	};

	expanded
}

#[cfg(test)]
mod tests {
	use syn::parse_quote;

	use super::*;

	#[test]
	fn colliding_handler_names_are_rejected() {
		let input: DeriveInput = parse_quote! {
			enum Endpoint {
				HTTPServer(i64),
				HttpServer(u64),
			}
		};
		let output = derive_tagged(&input).to_string();
		assert!(output.contains("compile_error"));
		assert!(output.contains(
			"`HTTPServer` and `HttpServer` both map to handler `visit_http_server`"
		));
	}

	#[test]
	fn one_handler_per_alternative() {
		let input: DeriveInput = parse_quote! {
			enum Shape {
				Circle(f64),
				Square(u32),
				Empty,
			}
		};
		let output = derive_tagged(&input).to_string();
		assert!(!output.contains("compile_error"));
		for handler in ["visit_circle", "visit_square", "visit_empty"] {
			assert!(output.contains(handler), "missing {handler}");
		}
	}
}
