// Copyright 2026 the vg_common Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The construction convention as seen by an engine object defined outside the crate.

use std::cell::Cell;

use vg_common::limits::{gradient_lut, GradientLut, Limits, GRADIENT_CHANNELS};
use vg_common::object::{Allocator, Global, Storage};
use vg_common::{delete_obj, deinit_obj, init_obj, new_obj, new_obj_in, EngineObject};

thread_local! {
    static LIVE: Cell<i32> = const { Cell::new(0) };
    static RESERVED: Cell<u32> = const { Cell::new(0) };
}

struct Gradient {
    lut: Box<GradientLut>,
}

impl EngineObject for Gradient {
    fn construct() -> Self {
        LIVE.with(|live| live.set(live.get() + 1));
        Self { lut: gradient_lut() }
    }

    fn destruct(&mut self) {
        LIVE.with(|live| live.set(live.get() - 1));
    }
}

/// Hands out heap storage, counting reservations.
struct Counting;

impl Allocator for Counting {
    fn reserve<T>(&self) -> vg_common::Result<Storage<T>> {
        RESERVED.with(|n| n.set(n.get() + 1));
        Global.reserve()
    }
}

#[test]
fn heap_lifetime_is_balanced() {
    let mut gradient = new_obj::<Gradient>().unwrap();
    assert_eq!(LIVE.with(Cell::get), 1);
    gradient.lut[..GRADIENT_CHANNELS].copy_from_slice(&[1.0, 0.5, 0.25, 1.0]);
    assert_eq!(gradient.lut[1], 0.5);
    delete_obj(Some(gradient));
    assert_eq!(LIVE.with(Cell::get), 0);
}

#[test]
fn drop_destructs_once() {
    {
        let _gradient = new_obj_in::<Gradient, _>(&Counting).unwrap();
        assert_eq!(LIVE.with(Cell::get), 1);
        assert_eq!(RESERVED.with(Cell::get), 1);
    }
    assert_eq!(LIVE.with(Cell::get), 0);
}

#[test]
fn caller_storage_lifetime_is_balanced() {
    let mut slot: Option<Gradient> = None;
    init_obj(&mut slot);
    assert_eq!(LIVE.with(Cell::get), 1);
    deinit_obj(&mut slot);
    assert_eq!(LIVE.with(Cell::get), 0);
    // The storage can be reused for a new object.
    init_obj(&mut slot);
    deinit_obj(&mut slot);
    assert_eq!(LIVE.with(Cell::get), 0);
}

#[test]
fn limits_are_shared_between_threads() {
    let limits = Limits::default().with_max_vertices(100);
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || limits.validate_vertices(i * 50).is_ok()))
        .collect();
    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, [true, true, true, false]);
}
