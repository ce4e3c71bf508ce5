use std::collections::HashMap;
use std::time::Duration;

use crate::animation::config::{AnimatedKind, AnimationConfig};
use crate::animation::motion::sample_idle;
use crate::assets::map::AssetMap;
use crate::foundation::core::{FrameSize, Point, Size};
use crate::foundation::error::ChainResult;
use crate::geometry::bounds::{ContentBounds, compute_content_bounds};
use crate::geometry::scale::{ScaleFit, compute_scale};
use crate::render::background::render_background;
use crate::render::button::render_button;
use crate::render::fingerprint::{Fingerprint, StableHasher, fingerprint_tree};
use crate::render::header::render_header;
use crate::render::offer::render_offer;
use crate::render::raster::{FrameRGBA, Rasterizer};
use crate::render::rewards::render_rewards;
use crate::render::svg::tree_to_svg;
use crate::render::timer::render_timer;
use crate::render::visual::{ElementId, RenderCtx, VisualNode, VisualTree};
use crate::scene::spec::ChainSpec;
use crate::state::events::{ListenerId, StateChange};
use crate::state::kind::{ButtonState, HeaderState, OfferState};
use crate::state::machine::{ChainStateStore, StateSnapshot};
use crate::state::timer::{TimerAction, TimerQueue};
use crate::viewer::options::{SyncPolicy, ViewerOptions};
use crate::viewer::visibility::{Visibility, VisibilityOverrides};

type ClickCallback = Box<dyn FnMut(&str)>;

/// Composes a chain specification, its resolved assets and the runtime state into a visual tree,
/// and routes interactions to the state machine.
///
/// The viewer owns the only [`ChainStateStore`] and the only timer queue. Time is driven by the
/// caller through [`ChainViewer::advance`]; nothing fires on its own. Dropping the viewer (or
/// replacing its specification) cancels every pending timer, so no deferred state write can
/// reach a torn-down instance.
pub struct ChainViewer {
    spec: ChainSpec,
    assets: AssetMap,
    options: ViewerOptions,
    visibility: Visibility,
    frame: FrameSize,
    fit: ScaleFit,
    store: ChainStateStore,
    timers: TimerQueue,
    on_click: Option<ClickCallback>,
    hovered: Option<String>,
    changed_at: HashMap<ElementId, Duration>,
    generation: u64,
    cache: Option<(Fingerprint, VisualTree)>,
}

impl std::fmt::Debug for ChainViewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainViewer")
            .field("chain", &self.spec.chain_id())
            .field("frame", &self.frame)
            .field("fit", &self.fit)
            .field("visibility", &self.visibility)
            .field("revision", &self.store.revision())
            .field("pending_timers", &self.timers.len())
            .field("has_click_callback", &self.on_click.is_some())
            .finish()
    }
}

impl ChainViewer {
    /// Viewer for `spec` with resolved `assets`.
    #[tracing::instrument(skip_all, fields(chain = spec.chain_id()))]
    pub fn new(spec: ChainSpec, assets: AssetMap, options: ViewerOptions) -> ChainResult<Self> {
        options.validate()?;
        let frame = spec.frame_size_or(options.default_frame_size);
        let fit = resolve_fit(frame, options.target)?;
        let visibility = Visibility::merged(&options.visibility);
        let mut store = ChainStateStore::new(&spec);
        store.record_changes(true);
        tracing::debug!(scale = fit.scale, ?visibility, "viewer created");
        Ok(Self {
            spec,
            assets,
            options,
            visibility,
            frame,
            fit,
            store,
            timers: TimerQueue::new(),
            on_click: None,
            hovered: None,
            changed_at: HashMap::new(),
            generation: 0,
            cache: None,
        })
    }

    /// Displayed specification.
    pub fn spec(&self) -> &ChainSpec {
        &self.spec
    }

    /// Resolved assets.
    pub fn assets(&self) -> &AssetMap {
        &self.assets
    }

    /// Current options.
    pub fn options(&self) -> &ViewerOptions {
        &self.options
    }

    /// Effective design frame (declared or default).
    pub fn frame_size(&self) -> FrameSize {
        self.frame
    }

    /// Current scale fit.
    pub fn scale_fit(&self) -> ScaleFit {
        self.fit
    }

    /// Current design-to-viewport scale.
    pub fn scale(&self) -> f64 {
        self.fit.scale
    }

    /// Effective visibility.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Read-only runtime state.
    pub fn state(&self) -> &ChainStateStore {
        &self.store
    }

    /// Copy of the runtime state.
    pub fn snapshot(&self) -> StateSnapshot {
        self.store.snapshot()
    }

    /// Viewer clock.
    pub fn clock(&self) -> Duration {
        self.timers.now()
    }

    /// Key of the button currently under the pointer.
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Replace the specification and assets. Runtime state starts over; listeners stay.
    pub fn set_spec(&mut self, spec: ChainSpec, assets: AssetMap) -> ChainResult<()> {
        let frame = spec.frame_size_or(self.options.default_frame_size);
        let fit = resolve_fit(frame, self.options.target)?;
        let cancelled = self.timers.cancel_all();
        tracing::debug!(chain = spec.chain_id(), cancelled, "specification replaced");
        self.store.reset(&spec);
        self.spec = spec;
        self.assets = assets;
        self.frame = frame;
        self.fit = fit;
        self.hovered = None;
        self.changed_at.clear();
        self.invalidate();
        Ok(())
    }

    /// Replace the resolved assets.
    pub fn set_assets(&mut self, assets: AssetMap) {
        self.assets = assets;
        self.invalidate();
    }

    /// Drop assets the displayed specification no longer references.
    pub fn release_unused_assets(&mut self) -> usize {
        let released = self.assets.retain_referenced(&self.spec);
        if released > 0 {
            self.invalidate();
        }
        released
    }

    /// Change the target viewport size and recompute the scale.
    pub fn set_target_size(&mut self, width: f64, height: f64) -> ChainResult<ScaleFit> {
        let target = Some(FrameSize::new(width, height));
        self.fit = resolve_fit(self.frame, target)?;
        self.options.target = target;
        self.invalidate();
        Ok(self.fit)
    }

    /// Replace the visibility overrides; they merge over all-visible.
    pub fn set_visibility(&mut self, overrides: VisibilityOverrides) {
        self.visibility = Visibility::merged(&overrides);
        self.options.visibility = overrides;
        self.invalidate();
    }

    /// Replace the animation configuration.
    pub fn set_animation(&mut self, animation: AnimationConfig) -> ChainResult<()> {
        animation.validate()?;
        self.options.animation = animation;
        self.invalidate();
        Ok(())
    }

    /// Change the offer to button coupling.
    pub fn set_sync_policy(&mut self, sync: SyncPolicy) {
        self.options.sync = sync;
    }

    /// Register the callback invoked with the offer key of every completed button click.
    pub fn on_button_click(&mut self, f: impl FnMut(&str) + 'static) {
        self.on_click = Some(Box::new(f));
    }

    /// Remove the click callback.
    pub fn clear_button_click(&mut self) {
        self.on_click = None;
    }

    /// Register a state change listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&StateChange) + 'static) -> ListenerId {
        self.store.subscribe(listener)
    }

    /// Remove a state change listener.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Activate an offer node: advance its state, and its button's under
    /// [`SyncPolicy::ButtonFollowsOffer`].
    pub fn activate_offer(&mut self, key: &str) -> ChainResult<OfferState> {
        let next = match self.options.sync {
            SyncPolicy::Independent => self.store.cycle_offer_state(key)?,
            SyncPolicy::ButtonFollowsOffer => {
                let next = self.store.cycle_offer_state_synced(key)?;
                self.cancel_revert(key);
                next
            }
        };
        self.absorb_changes();
        Ok(next)
    }

    /// Activate the header: advance it one step along its cycle.
    pub fn activate_header(&mut self) -> HeaderState {
        let next = self.store.cycle_header_state();
        self.absorb_changes();
        next
    }

    /// Set an offer state directly.
    pub fn set_offer_state(&mut self, key: &str, state: OfferState) -> ChainResult<()> {
        self.store.set_offer_state(key, state)?;
        self.absorb_changes();
        Ok(())
    }

    /// Set the header state directly.
    pub fn set_header_state(&mut self, state: HeaderState) {
        self.store.set_header_state(state);
        self.absorb_changes();
    }

    /// Set a button state directly. A pending click feedback revert for the button is dropped.
    pub fn set_button_state(&mut self, key: &str, state: ButtonState) -> ChainResult<()> {
        self.store.set_button_state(key, state)?;
        self.cancel_revert(key);
        self.absorb_changes();
        Ok(())
    }

    /// Pointer entered a button.
    pub fn button_mouse_enter(&mut self, key: &str) -> ChainResult<ButtonState> {
        let state = self.store.button_mouse_enter(key)?;
        self.absorb_changes();
        Ok(state)
    }

    /// Pointer left a button. Leaving during click feedback ends it early.
    pub fn button_mouse_leave(&mut self, key: &str) -> ChainResult<ButtonState> {
        let state = self.store.button_mouse_leave(key)?;
        if state != ButtonState::Active {
            self.cancel_revert(key);
        }
        self.absorb_changes();
        Ok(state)
    }

    /// Click a button.
    ///
    /// The button enters `active`, the click callback runs once with `key`, and a revert to
    /// `default` is scheduled after the click feedback delay. Disabled and claimed buttons ignore
    /// the click and the callback does not run; the return value tells which happened.
    pub fn button_click(&mut self, key: &str) -> ChainResult<bool> {
        if !self.store.button_press(key)? {
            return Ok(false);
        }
        self.cancel_revert(key);
        self.timers.schedule(
            self.options.animation.click_feedback(),
            TimerAction::RevertButton(key.to_owned()),
        );
        self.absorb_changes();
        if let Some(cb) = self.on_click.as_mut() {
            cb(key);
        }
        Ok(true)
    }

    /// Pointer pressed at `p` (viewport pixels): dispatch to the topmost interactive element.
    pub fn pointer_down(&mut self, p: Point) -> ChainResult<Option<ElementId>> {
        let hit = self.compose().hit_test(p).map(|n| n.id.clone());
        match &hit {
            Some(ElementId::Offer(key)) => {
                self.activate_offer(key)?;
            }
            Some(ElementId::Header) => {
                self.activate_header();
            }
            Some(ElementId::Button(key)) => {
                self.button_click(key)?;
            }
            _ => {}
        }
        Ok(hit)
    }

    /// Pointer moved to `p`: drive hover enter/leave for buttons. Returns the hovered button.
    pub fn pointer_move(&mut self, p: Point) -> ChainResult<Option<String>> {
        let over = match self.compose().hit_test(p).map(|n| &n.id) {
            Some(ElementId::Button(key)) => Some(key.clone()),
            _ => None,
        };
        if over != self.hovered {
            if let Some(prev) = self.hovered.take() {
                self.button_mouse_leave(&prev)?;
            }
            if let Some(key) = &over {
                self.button_mouse_enter(key)?;
            }
            self.hovered = over.clone();
        }
        Ok(over)
    }

    /// Pointer left the viewer.
    pub fn pointer_leave(&mut self) -> ChainResult<()> {
        if let Some(prev) = self.hovered.take() {
            self.button_mouse_leave(&prev)?;
        }
        Ok(())
    }

    /// Advance the viewer clock and apply the timers that became due.
    pub fn advance(&mut self, elapsed: Duration) -> ChainResult<()> {
        for action in self.timers.advance(elapsed) {
            match action {
                TimerAction::RevertButton(key) => {
                    self.store.button_release(&key)?;
                }
                TimerAction::SettleAnimation => {
                    if !self.timers.any(|a| *a == TimerAction::SettleAnimation) {
                        self.store.set_animating(false);
                    }
                }
            }
        }
        self.absorb_changes();
        Ok(())
    }

    /// Content bounds of the current view.
    pub fn content_bounds(&self) -> ContentBounds {
        compute_content_bounds(
            &self.spec,
            self.frame,
            &self.store,
            self.fit.scale,
            &self.visibility,
        )
    }

    /// Composed visual tree. Memoized on the inputs; recomposing unchanged inputs is free.
    pub fn compose(&mut self) -> &VisualTree {
        let key = self.inputs_fingerprint();
        let tree = match self.cache.take() {
            Some((k, tree)) if k == key => tree,
            _ => self.build_tree(),
        };
        &self.cache.insert((key, tree)).1
    }

    /// Fingerprint of the composed tree.
    pub fn tree_fingerprint(&mut self) -> Fingerprint {
        fingerprint_tree(self.compose())
    }

    /// Composed view as an SVG document.
    pub fn render_svg(&mut self) -> String {
        tree_to_svg(self.compose())
    }

    /// Composed view as pixels.
    pub fn rasterize(&mut self, rasterizer: &Rasterizer) -> ChainResult<FrameRGBA> {
        rasterizer.render_tree(self.compose())
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.cache = None;
    }

    fn cancel_revert(&mut self, key: &str) {
        self.timers
            .cancel_where(|a| matches!(a, TimerAction::RevertButton(k) if k == key));
    }

    /// Stamp change times and raise the animating flag for changes made since the last call.
    fn absorb_changes(&mut self) {
        let now = self.timers.now();
        let mut settle: Option<Duration> = None;
        for change in self.store.drain_changes() {
            let (id, kind) = match change {
                StateChange::Offer { key, .. } => (ElementId::Offer(key), AnimatedKind::Offer),
                StateChange::Header { .. } => (ElementId::Header, AnimatedKind::Header),
                StateChange::Button { key, .. } => (ElementId::Button(key), AnimatedKind::Button),
                StateChange::Animating { .. } => continue,
            };
            self.changed_at.insert(id, now);
            let total = self.options.animation.element(kind).transition.total();
            settle = settle.max(Some(total));
        }
        if let Some(total) = settle
            && !total.is_zero()
        {
            self.store.set_animating(true);
            self.timers.schedule(total, TimerAction::SettleAnimation);
        }
        // Only the animating flag can have been logged since the drain.
        self.store.drain_changes();
    }

    fn inputs_fingerprint(&self) -> Fingerprint {
        let mut h = StableHasher::new();
        h.write_u64(self.generation);
        h.write_u64(self.store.revision());
        h.write_f64(self.fit.scale);
        let v = self.visibility;
        for b in [v.background, v.header, v.offers, v.timer, v.buttons, v.rewards] {
            h.write_bool(b);
        }
        let a = &self.options.animation;
        let moving = [&a.offer, &a.header, &a.button]
            .iter()
            .any(|e| !e.idle.is_still());
        let now = self.timers.now();
        if moving {
            h.write_u64(u64::try_from(now.as_nanos()).unwrap_or(u64::MAX));
        } else if v.timer && self.spec.timer().is_some_and(|t| t.duration_seconds.is_some()) {
            h.write_u64(now.as_secs());
        }
        h.finish()
    }

    #[tracing::instrument(skip(self), fields(revision = self.store.revision()))]
    fn build_tree(&self) -> VisualTree {
        let scale = self.fit.scale;
        let size = Size::new(self.fit.scaled_width, self.fit.scaled_height);
        let ctx = RenderCtx::new(scale, size);
        let now = self.timers.now();
        let v = self.visibility;
        let mut tree = VisualTree::new(size, scale);

        if v.background && (self.spec.background().is_some() || self.assets.background().is_some())
        {
            tree.push(render_background(self.frame, scale, self.assets.background()));
        }

        if v.timer
            && let Some(timer) = self.spec.timer()
        {
            tree.push(render_timer(timer, scale, now));
        }

        if v.header
            && let Some(header) = self.spec.header()
        {
            let state = self.store.header_state();
            let image = self.assets.header_image(state);
            if let Some(node) = render_header(header, state, scale, image) {
                tree.push(self.animate(node, AnimatedKind::Header));
            }
        }

        if v.rewards
            && let Some(rewards) = self.spec.rewards()
        {
            for node in render_rewards(rewards, scale, &self.assets) {
                tree.push(node);
            }
        }

        if v.offers {
            for offer in self.spec.offers() {
                let Some(state) = self.store.offer_state(&offer.offer_key) else {
                    continue;
                };
                let image = self.assets.offer_image(&offer.offer_key, state);
                if let Some(node) = render_offer(offer, state, scale, image) {
                    tree.push(self.animate(node, AnimatedKind::Offer));
                }
            }
        }

        if v.buttons {
            for button in self.spec.buttons() {
                let Some(state) = self.store.button_state(&button.offer_key) else {
                    continue;
                };
                let icon = self.assets.button_icon(&button.offer_key, state);
                if let Some(node) = render_button(button, state, &ctx, icon) {
                    tree.push(self.animate(node, AnimatedKind::Button));
                }
            }
        }

        tracing::trace!(nodes = tree.nodes.len(), "tree composed");
        tree
    }

    fn animate(&self, mut node: VisualNode, kind: AnimatedKind) -> VisualNode {
        let now = self.timers.now();
        let el = self.options.animation.element(kind);
        let since = self
            .changed_at
            .get(&node.id)
            .map(|t| now.saturating_sub(*t));
        node.transition = Some(el.transition);
        node.motion = sample_idle(&el.idle, now, since, self.fit.scale);
        node
    }
}

impl Drop for ChainViewer {
    fn drop(&mut self) {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            tracing::debug!(cancelled, "pending timers cancelled on teardown");
        }
    }
}

/// Scale fit for `target`; a missing or non-positive target renders at the frame size.
fn resolve_fit(frame: FrameSize, target: Option<FrameSize>) -> ChainResult<ScaleFit> {
    match target {
        Some(t) if t.is_positive() => compute_scale(frame, t),
        Some(t) => {
            tracing::debug!(
                width = t.width,
                height = t.height,
                "degenerate target, using frame size"
            );
            Ok(ScaleFit::identity(frame))
        }
        None => Ok(ScaleFit::identity(frame)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/viewer/coordinator.rs"]
mod tests;
