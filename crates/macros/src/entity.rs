//! Entity derive macro implementation.
//!
//! Provides `#[derive(Entity)]` for building static field descriptors.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Member};

/// One addressable field of the deriving struct.
struct FieldSpec {
	member: Member,
	name: String,
	ty: syn::Type,
}

/// Entry point for the `#[derive(Entity)]` macro.
///
/// ```ignore
/// #[derive(Entity)]
/// struct Point { x: i64, y: i64 }
/// ```
///
/// Generates an `Entity` impl whose `FIELDS` holds one descriptor per
/// addressable field, each with a getter and a setter closure.
pub fn derive_entity(input: &DeriveInput) -> TokenStream {
	let ident = &input.ident;

	let Data::Struct(data) = &input.data else {
		return syn::Error::new_spanned(input, "Entity can only be derived for structs")
			.to_compile_error();
	};

	let mut name: Option<String> = None;
	let mut rows: Option<syn::Ident> = None;

	for attr in input.attrs.iter().filter(|a| a.path().is_ident("entity")) {
		if let Err(e) = attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("name") {
				let value: syn::LitStr = meta.value()?.parse()?;
				name = Some(value.value());
				Ok(())
			} else if meta.path.is_ident("rows") {
				rows = Some(meta.value()?.parse()?);
				Ok(())
			} else {
				Err(meta.error("unknown entity attribute"))
			}
		}) {
			return e.to_compile_error();
		}
	}

	let name = name.unwrap_or_else(|| ident.to_string());

	let mut specs = Vec::new();
	let named = matches!(data.fields, Fields::Named(_));
	for (position, field) in data.fields.iter().enumerate() {
		let mut skip = false;
		let mut rename: Option<String> = None;

		for attr in field.attrs.iter().filter(|a| a.path().is_ident("field")) {
			if let Err(e) = attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("skip") {
					skip = true;
					Ok(())
				} else if meta.path.is_ident("rename") {
					let value: syn::LitStr = meta.value()?.parse()?;
					rename = Some(value.value());
					Ok(())
				} else {
					Err(meta.error("unknown field attribute"))
				}
			}) {
				return e.to_compile_error();
			}
		}

		if skip {
			continue;
		}

		let member = match &field.ident {
			Some(field_ident) if named => Member::Named(field_ident.clone()),
			_ => Member::Unnamed(syn::Index::from(position)),
		};
		let default_name = match &member {
			Member::Named(field_ident) => field_ident.to_string(),
			Member::Unnamed(index) => index.index.to_string(),
		};

		specs.push(FieldSpec {
			member,
			name: rename.unwrap_or(default_name),
			ty: field.ty.clone(),
		});
	}

	let descriptors = specs.iter().enumerate().map(|(index, spec)| {
		let FieldSpec { member, name, ty } = spec;
		quote! {
			::polyslot::FieldDescriptor::new(
				#index,
				#name,
				<#ty as ::polyslot::FieldKind>::TYPE,
				|entity: &Self| ::polyslot::FieldKind::to_value(&entity.#member),
				|entity: &mut Self, value: ::polyslot::FieldValue| {
					if let ::core::option::Option::Some(value) =
						<#ty as ::polyslot::FieldKind>::from_value(value)
					{
						entity.#member = value;
					}
				},
			)
		}
	});

	let row_count = rows.map(|method| {
		quote! {
			fn row_count(&self) -> ::core::option::Option<usize> {
				::core::option::Option::Some(Self::#method(self))
			}
		}
	});

	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	let expanded = quote! {
		impl #impl_generics ::polyslot::Entity for #ident #ty_generics #where_clause {
			const NAME: &'static str = #name;
			const FIELDS: &'static [::polyslot::FieldDescriptor<Self>] = &[
				#(#descriptors,)*
			];

			#row_count
		}
	};

	expanded
}
