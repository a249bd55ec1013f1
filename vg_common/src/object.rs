// Copyright 2026 the vg_common Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The construction convention shared by all engine objects.
//!
//! Every engine object (paths, paints, images, contexts) implements [`EngineObject`]. The free
//! functions in this module pair its `construct` and `destruct` hooks one to one, either on
//! storage the caller owns ([`init_obj`], [`deinit_obj`]) or on heap storage reserved for the
//! object ([`new_obj`], [`delete_obj`]).
//!
//! ```
//! use vg_common::object::{delete_obj, new_obj, EngineObject};
//!
//! struct Stroke {
//!     dashes: Vec<f32>,
//! }
//!
//! impl EngineObject for Stroke {
//!     fn construct() -> Self {
//!         Self { dashes: Vec::new() }
//!     }
//!
//!     fn destruct(&mut self) {
//!         self.dashes.clear();
//!     }
//! }
//!
//! let stroke = new_obj::<Stroke>().expect("out of memory");
//! assert!(stroke.dashes.is_empty());
//! delete_obj(Some(stroke));
//! ```

use alloc::vec::Vec;
use core::any::type_name;
use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::Result;

/// An object with an explicit construct and destruct step.
pub trait EngineObject: Sized {
    /// Builds a freshly initialized object.
    fn construct() -> Self;

    /// Releases what the object holds. The storage itself stays valid.
    fn destruct(&mut self);
}

/// Constructs an object into empty caller-owned storage and returns it.
///
/// The storage must not hold a live object; only debug builds check this.
pub fn init_obj<T: EngineObject>(slot: &mut Option<T>) -> &mut T {
    debug_assert!(
        slot.is_none(),
        "init_obj on storage that already holds a {}",
        type_name::<T>()
    );
    slot.insert(T::construct())
}

/// Destructs the object held in caller-owned storage, leaving the storage empty.
///
/// Destructing empty storage is a contract violation; only debug builds check this.
pub fn deinit_obj<T: EngineObject>(slot: &mut Option<T>) {
    debug_assert!(
        slot.is_some(),
        "deinit_obj on storage without a live {}",
        type_name::<T>()
    );
    if let Some(mut obj) = slot.take() {
        obj.destruct();
    }
}

/// Heap storage with room for exactly one `T`, not yet holding it.
pub struct Storage<T> {
    slot: Vec<T>,
}

impl<T> Storage<T> {
    /// Reserves room for one `T` on the heap without aborting on failure.
    pub fn try_new() -> Result<Self> {
        let mut slot = Vec::new();
        slot.try_reserve_exact(1)?;
        Ok(Self { slot })
    }
}

impl<T> fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("type", &type_name::<T>())
            .finish()
    }
}

/// A source of object storage.
pub trait Allocator {
    /// Reserves storage for one `T`.
    fn reserve<T>(&self) -> Result<Storage<T>>;
}

/// The global heap.
#[derive(Copy, Clone, Debug, Default)]
pub struct Global;

impl Allocator for Global {
    fn reserve<T>(&self) -> Result<Storage<T>> {
        Storage::try_new()
    }
}

/// An engine object on the heap.
///
/// Dropping the box runs [`EngineObject::destruct`] exactly once, then frees the storage.
pub struct ObjBox<T: EngineObject> {
    // Always holds exactly one element.
    slot: Vec<T>,
}

impl<T: EngineObject> Deref for ObjBox<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.slot[0]
    }
}

impl<T: EngineObject> DerefMut for ObjBox<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.slot[0]
    }
}

impl<T: EngineObject + fmt::Debug> fmt::Debug for ObjBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjBox").field(&**self).finish()
    }
}

impl<T: EngineObject> Drop for ObjBox<T> {
    fn drop(&mut self) {
        if let Some(obj) = self.slot.first_mut() {
            obj.destruct();
            log::trace!("Destructed {}", type_name::<T>());
        }
    }
}

/// Reserves heap storage for a `T` and constructs it there.
///
/// Returns `None` if the storage couldn't be reserved, in which case nothing is constructed.
pub fn new_obj<T: EngineObject>() -> Option<ObjBox<T>> {
    new_obj_in(&Global)
}

/// Like [`new_obj`], taking storage from `alloc`.
pub fn new_obj_in<T: EngineObject, A: Allocator>(alloc: &A) -> Option<ObjBox<T>> {
    match alloc.reserve::<T>() {
        Ok(Storage { mut slot }) => {
            // Room was reserved, so this doesn't allocate.
            slot.push(T::construct());
            log::trace!("Constructed {}", type_name::<T>());
            Some(ObjBox { slot })
        }
        Err(err) => {
            log::warn!("Couldn't allocate {}: {err}", type_name::<T>());
            None
        }
    }
}

/// Destructs and frees a heap object. `None` is ignored.
pub fn delete_obj<T: EngineObject>(obj: Option<ObjBox<T>>) {
    // Dropping the box destructs it.
    drop(obj);
}
