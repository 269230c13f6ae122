//! Compile-time slot enumeration.
//!
//! A slot list is a tuple of exclusive entity references. Resolving a runtime
//! object index against it is a macro-unrolled `match` over the tuple
//! positions: each arm is monomorphized for that position's entity type, so
//! no type tag table, boxed closure or trait object is involved.

use crate::entity::{Entity, is_contiguous};

/// Operation run against the one slot an object index resolves to.
///
/// The visitor is generic over the slot's entity type; each tuple position
/// instantiates it once.
pub trait SlotVisitor {
	type Output;

	fn visit<E: Entity>(self, position: usize, entity: &E) -> Self::Output;
}

/// Mutating counterpart of [`SlotVisitor`].
pub trait SlotVisitorMut {
	type Output;

	fn visit<E: Entity>(self, position: usize, entity: &mut E) -> Self::Output;
}

/// Fixed, ordered list of entity slots.
///
/// Implemented for tuples `(&mut A,)` through `(&mut A, ..., &mut L)` of up to
/// twelve entities.
pub trait SlotList {
	/// Number of slots.
	const LEN: usize;

	/// True when every slot's descriptor indexes its fields `0..field_count`
	/// in order.
	const CONTIGUOUS: bool;

	/// Runs `visitor` on the slot at `index`, or returns `None` if no slot
	/// sits there.
	fn visit<V: SlotVisitor>(&self, index: usize, visitor: V) -> Option<V::Output>;

	/// Runs `visitor` on the slot at `index` with write access.
	fn visit_mut<V: SlotVisitorMut>(&mut self, index: usize, visitor: V) -> Option<V::Output>;
}

macro_rules! impl_slot_list {
	($len:literal; $($idx:tt $ty:ident),+) => {
		impl<'a, $($ty: Entity),+> SlotList for ($(&'a mut $ty,)+) {
			const LEN: usize = $len;
			const CONTIGUOUS: bool = $(is_contiguous($ty::FIELDS))&&+;

			fn visit<V: SlotVisitor>(&self, index: usize, visitor: V) -> Option<V::Output> {
				match index {
					$($idx => Some(visitor.visit::<$ty>($idx, &*self.$idx)),)+
					_ => None,
				}
			}

			fn visit_mut<V: SlotVisitorMut>(
				&mut self,
				index: usize,
				visitor: V,
			) -> Option<V::Output> {
				match index {
					$($idx => Some(visitor.visit::<$ty>($idx, &mut *self.$idx)),)+
					_ => None,
				}
			}
		}
	};
}

impl_slot_list!(1; 0 A);
impl_slot_list!(2; 0 A, 1 B);
impl_slot_list!(3; 0 A, 1 B, 2 C);
impl_slot_list!(4; 0 A, 1 B, 2 C, 3 D);
impl_slot_list!(5; 0 A, 1 B, 2 C, 3 D, 4 E);
impl_slot_list!(6; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_slot_list!(7; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_slot_list!(8; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);
impl_slot_list!(9; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I);
impl_slot_list!(10; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J);
impl_slot_list!(11; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K);
impl_slot_list!(12; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H, 8 I, 9 J, 10 K, 11 L);
