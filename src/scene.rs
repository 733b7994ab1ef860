//! The single entry point composing codec, invoker, callbacks, readiness and
//! recording into the scene vocabulary.
//!
//! Every remote operation follows one pattern: encode inputs, issue the
//! gated call with the class-appropriate timeout, decode the result. The
//! generic [`Scene::call`] helper is that pattern; the per-operation wrappers
//! in the submodules stay a few lines each.

mod adapters;
pub mod objects;
pub mod playback;
pub mod plots;
pub mod shapes;
pub mod three_d;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::bridge::callbacks::CallbackHandle;
use crate::bridge::connection::EngineConnection;
use crate::bridge::invoker::CallOpts;
use crate::bridge::link::EngineLink;
use crate::foundation::error::ScenelinkResult;
use crate::model::Point2;
use crate::model::node::VectorNode;
use crate::model::paint::Paint;
use crate::record::FrameFormat;
use crate::wire::codec::{self, WireValue, wire_args};

/// An engine asset (wasm blob, loader script, font bundle) the embedding
/// layer must expose to the engine runtime. Passed explicitly through
/// [`SceneConfig`] instead of any process-global registry.
#[derive(Clone, Debug)]
pub struct EngineAsset {
    pub key: String,
    pub path: PathBuf,
}

/// Static configuration for one scene/engine pair.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Engine playback rate in frames per second.
    pub fps: u32,
    /// Frame output format (governs recording and the engine's renderer).
    pub format: FrameFormat,
    /// Response bound for short synchronous geometry queries.
    pub query_timeout: Option<Duration>,
    /// Response bound for long-running animation calls; `None` waits
    /// indefinitely.
    pub animation_timeout: Option<Duration>,
    /// Assets the embedding layer serves to the engine runtime.
    pub engine_assets: Vec<EngineAsset>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: 60,
            format: FrameFormat::Png,
            query_timeout: Some(Duration::from_secs(10)),
            animation_timeout: None,
            engine_assets: Vec::new(),
        }
    }
}

/// Timeout class of a remote operation (see [`SceneConfig`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CallClass {
    Query,
    Animation,
}

/// A scene hosted by a remote engine instance.
///
/// All graph construction and animation goes through here; the scene-graph
/// values themselves ([`VectorNode`], [`crate::SolidNode`], [`Paint`], ...)
/// are plain persistent data with no link back to the engine.
pub struct Scene {
    conn: EngineConnection,
    config: SceneConfig,
    updaters: Mutex<HashMap<i64, CallbackHandle>>,
    on_rendered: Mutex<Option<CallbackHandle>>,
}

impl Scene {
    /// Connect to an engine over `link`.
    pub fn connect(link: impl EngineLink + 'static, config: SceneConfig) -> ScenelinkResult<Self> {
        Ok(Self {
            conn: EngineConnection::open(link)?,
            config,
            updaters: Mutex::new(HashMap::new()),
            on_rendered: Mutex::new(None),
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn connection(&self) -> &EngineConnection {
        &self.conn
    }

    /// Request engine initialization and park until its `ready` event.
    /// Idempotent; terminal once ready.
    #[tracing::instrument(skip(self))]
    pub fn wait_until_ready(&self) -> ScenelinkResult<()> {
        self.conn.gate().request();
        self.conn
            .invoker()
            .invoke("emitReady", Vec::new(), CallOpts::ungated())?;
        self.conn.gate().wait_ready();
        Ok(())
    }

    pub(crate) fn opts(&self, class: CallClass) -> CallOpts {
        let timeout = match class {
            CallClass::Query => self.config.query_timeout,
            CallClass::Animation => self.config.animation_timeout,
        };
        CallOpts::gated(timeout)
    }

    /// Issue a raw remote call. Public escape hatch for engine methods not
    /// covered by the typed wrappers.
    pub fn invoke(
        &self,
        method: &str,
        args: Vec<WireValue>,
        opts: CallOpts,
    ) -> ScenelinkResult<WireValue> {
        self.conn.invoker().invoke(method, args, opts)
    }

    /// The fixed per-operation pattern: gated invoke, typed decode.
    pub(crate) fn call<T: DeserializeOwned>(
        &self,
        class: CallClass,
        method: &str,
        args: Vec<WireValue>,
    ) -> ScenelinkResult<T> {
        let value = self.conn.invoker().invoke(method, args, self.opts(class))?;
        codec::from_wire(value)
    }

    /// Same pattern for operations whose result carries no data.
    pub(crate) fn call_unit(
        &self,
        class: CallClass,
        method: &str,
        args: Vec<WireValue>,
    ) -> ScenelinkResult<()> {
        self.conn.invoker().invoke(method, args, self.opts(class))?;
        Ok(())
    }

    /// Forward a log line into the engine console.
    pub fn log(&self, message: &str) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "log", wire_args![message])
    }

    // ---- scene-graph membership ------------------------------------------

    /// Add a node to the engine's display list.
    pub fn add(&self, node: &VectorNode) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "addToScene", wire_args![node])
    }

    /// Remove the node slotted at `index`.
    pub fn remove(&self, index: i64) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "removeFromScene", wire_args![index])
    }

    /// Drop every node from the display list.
    pub fn clear(&self) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "clearScene", Vec::new())
    }

    /// Snapshot the engine-side scene under `slot`.
    pub fn save_state(&self, slot: i64) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "saveState", wire_args![slot])
    }

    /// Restore the engine-side scene snapshot at `slot`.
    pub fn restore(&self, slot: i64) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "restoreState", wire_args![slot])
    }

    /// All nodes currently in the display list.
    pub fn get_objects(&self) -> ScenelinkResult<Vec<VectorNode>> {
        self.call(CallClass::Query, "getObjects", Vec::new())
    }

    pub fn set_background(&self, background: &Paint) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Query, "setBackground", wire_args![background])
    }

    /// Move the visible region's top-left corner.
    pub fn set_top_left_corner(&self, corner: Point2) -> ScenelinkResult<()> {
        self.call_unit(
            CallClass::Query,
            "setTopLeftCorner",
            wire_args![corner.x(), corner.y()],
        )
    }

    /// Move the visible region's bottom-right corner.
    pub fn set_bottom_right_corner(&self, corner: Point2) -> ScenelinkResult<()> {
        self.call_unit(
            CallClass::Query,
            "setBottomRightCorner",
            wire_args![corner.x(), corner.y()],
        )
    }

    // ---- rendering and recording -----------------------------------------

    /// Ask the engine to render the current display list once.
    pub fn render_frame(&self) -> ScenelinkResult<()> {
        self.call_unit(CallClass::Animation, "renderFrame", Vec::new())
    }

    /// Install a host function the engine invokes after every render.
    /// Replaces (and retires) any previous hook.
    pub fn set_on_rendered(
        &self,
        f: impl Fn() + Send + Sync + 'static,
    ) -> ScenelinkResult<()> {
        let handle = self.conn.callbacks().register(move |_args| {
            f();
            Ok(WireValue::Null)
        });
        self.call_unit(CallClass::Query, "setOnRendered", wire_args![handle])
            .inspect_err(|_| {
                self.conn.callbacks().retire(handle);
            })?;
        let previous = self
            .on_rendered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(old) = previous {
            self.conn.callbacks().retire(old);
        }
        Ok(())
    }

    /// Arm frame capture into `dir` (cleared of stale frames first), then
    /// tell the engine to start emitting frames.
    pub fn begin_recording(&self, dir: impl AsRef<Path>) -> ScenelinkResult<()> {
        self.conn
            .recorder()
            .begin(dir.as_ref(), self.config.format)?;
        self.call_unit(CallClass::Query, "beginRecording", Vec::new())
    }

    /// Stop the engine's frame emission and disarm capture. Returns the
    /// number of frames written, or the first capture error of the session.
    pub fn stop_recording(&self) -> ScenelinkResult<u64> {
        self.call_unit(CallClass::Query, "stopRecording", Vec::new())?;
        self.conn.recorder().stop()
    }

    pub(crate) fn updaters(&self) -> std::sync::MutexGuard<'_, HashMap<i64, CallbackHandle>> {
        self.updaters.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
