//! Playback control: animation runs driven by host callbacks, waits, and
//! per-slot updaters. These calls span many engine frames, so they run under
//! the animation timeout (unbounded by default).

use std::collections::HashMap;

use crate::bridge::callbacks::ScopedCallback;
use crate::foundation::error::ScenelinkResult;
use crate::model::node::VectorNode;
use crate::scene::{CallClass, Scene, adapters};
use crate::wire::codec::wire_args;

impl Scene {
    /// Run `animation` over the display slots in `object_indices` for
    /// `duration_in_frames` frames. The engine calls back once per frame
    /// with the current objects and normalized time `t`; the returned map
    /// replaces those slots. Resolves when the run finishes.
    pub fn play(
        &self,
        animation: impl Fn(HashMap<i64, VectorNode>, f64) -> ScenelinkResult<HashMap<i64, VectorNode>>
        + Send
        + Sync
        + 'static,
        object_indices: &[i64],
        duration_in_frames: u32,
    ) -> ScenelinkResult<()> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::animation(animation));
        self.call_unit(
            CallClass::Animation,
            "play",
            wire_args![cb.handle, object_indices, duration_in_frames],
        )
    }

    /// Hold the listed slots on screen for `duration_in_frames` frames.
    pub fn wait(&self, duration_in_frames: u32, object_indices: &[i64]) -> ScenelinkResult<()> {
        self.call_unit(
            CallClass::Animation,
            "wait",
            wire_args![duration_in_frames, object_indices],
        )
    }

    /// Keep rendering the listed slots until `condition` returns true. The
    /// predicate runs as an engine callback once per frame.
    pub fn wait_until(
        &self,
        condition: impl Fn() -> bool + Send + Sync + 'static,
        object_indices: &[i64],
    ) -> ScenelinkResult<()> {
        let cb = ScopedCallback::new(self.connection().callbacks(), adapters::predicate(condition));
        self.call_unit(
            CallClass::Animation,
            "waitUntil",
            wire_args![cb.handle, object_indices],
        )
    }

    /// Install a per-frame updater for display slot `index`. Replaces (and
    /// retires) any updater previously installed on that slot.
    pub fn set_updater(
        &self,
        index: i64,
        updater: impl Fn(VectorNode) -> VectorNode + Send + Sync + 'static,
    ) -> ScenelinkResult<()> {
        let handle = self
            .connection()
            .callbacks()
            .register(adapters::updater(updater));
        self.call_unit(CallClass::Query, "setUpdater", wire_args![index, handle])
            .inspect_err(|_| {
                self.connection().callbacks().retire(handle);
            })?;
        if let Some(old) = self.updaters().insert(index, handle) {
            self.connection().callbacks().retire(old);
        }
        Ok(())
    }

    /// Remove (and retire) the updater on display slot `index`.
    pub fn remove_updater(&self, index: i64) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "removeUpdater", wire_args![index])?;
        if let Some(handle) = self.updaters().remove(&index) {
            self.connection().callbacks().retire(handle);
        }
        Ok(())
    }
}
