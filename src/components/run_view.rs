use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use crate::model::{RunAction, RunState};
use crate::sim::Intent;
use crate::state::{Pointer, Viewport};

use super::{
    board::draw_board, controls_panel::ControlsPanel, game_over_overlay::GameOverOverlay,
    stats_panel::StatsPanel, time_display::TimeDisplay, tower_panel::TowerPanel,
};

#[derive(Properties, PartialEq, Clone)]
pub struct RunViewProps {
    pub run_state: UseReducerHandle<RunState>,
    pub restart_run: Callback<()>,
}

#[function_component(RunView)]
pub fn run_view(props: &RunViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let viewport = use_mut_ref(Viewport::default);
    let pointer = use_mut_ref(Pointer::default);
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let run_state_ref = use_mut_ref(|| props.run_state.clone());

    // Effect: update run handle each version, then repaint
    {
        let run_state_ref = run_state_ref.clone();
        let current_handle = props.run_state.clone();
        let draw_ref_local = draw_ref.clone();
        let version = props.run_state.version;
        use_effect_with(version, move |_| {
            *run_state_ref.borrow_mut() = current_handle;
            if let Some(f) = &*draw_ref_local.borrow() {
                f();
            }
            || ()
        });
    }
    // Main mount effect (canvas, frame loop, mouse)
    {
        let canvas_ref = canvas_ref.clone();
        let viewport = viewport.clone();
        let pointer = pointer.clone();
        let run_state_ref = run_state_ref.clone();
        let draw_ref_setup = draw_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();
            let (Some(window), Some(canvas)) = (window, canvas) else {
                log::error!("run view mounted without a window or canvas");
                return Box::new(|| ()) as Box<dyn FnOnce()>;
            };
            let document = window.document();
            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                let viewport = viewport.clone();
                let run_state_ref = run_state_ref.clone();
                move || {
                    let nav_height: f64 = document
                        .as_ref()
                        .and_then(|d| d.get_element_by_id("top-bar"))
                        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                        .map(|el| el.client_height() as f64)
                        .unwrap_or(0.0);
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0)
                        - nav_height;
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                    let handle = run_state_ref.borrow().clone();
                    let cfg = handle.game.config();
                    viewport
                        .borrow_mut()
                        .fit(width.max(0.0), height.max(0.0), cfg.width, cfg.height);
                }
            };
            compute_and_apply_canvas_size();
            // Draw closure
            let draw_closure: Rc<dyn Fn()> = {
                let canvas = canvas.clone();
                let viewport = viewport.clone();
                let run_state_ref = run_state_ref.clone();
                Rc::new(move || {
                    if !canvas.is_connected() {
                        return;
                    }
                    let Some(ctx) = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                    else {
                        return;
                    };
                    let handle = run_state_ref.borrow().clone();
                    let snap = handle.game.snapshot();
                    draw_board(
                        &ctx,
                        canvas.width() as f64,
                        canvas.height() as f64,
                        &snap,
                        handle.game.config(),
                        &viewport.borrow(),
                    );
                })
            };
            *draw_ref_setup.borrow_mut() = Some(draw_closure.clone());
            (draw_closure)();
            // RAF loop: every frame advances the simulation; the version effect repaints
            let raf_id = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let run_state_ref_loop = run_state_ref.clone();
                let window_loop = window.clone();
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
                    let handle = run_state_ref_loop.borrow().clone();
                    handle.dispatch(RunAction::Frame { timestamp_ms });
                    if let Some(cb) = closure_cell_clone.borrow().as_ref() {
                        if let Ok(id) = window_loop.request_animation_frame(cb.as_ref().unchecked_ref()) {
                            *raf_id_clone.borrow_mut() = Some(id);
                        }
                    }
                })
                    as Box<dyn FnMut(f64)>));
                if let Some(cb) = closure_cell.borrow().as_ref() {
                    if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                        *raf_id.borrow_mut() = Some(id);
                    }
                }
            }
            let board_point = {
                let viewport = viewport.clone();
                move |e: &web_sys::MouseEvent| {
                    viewport
                        .borrow()
                        .to_board(e.offset_x() as f64, e.offset_y() as f64)
                }
            };
            let mousedown_cb = {
                let pointer = pointer.clone();
                let run_state_ref_ct = run_state_ref.clone();
                let board_point = board_point.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    if e.button() != 0 {
                        return;
                    }
                    let handle = run_state_ref_ct.borrow().clone();
                    if handle.game.state().is_over() {
                        return;
                    }
                    let p = board_point(&e);
                    let mut ptr = pointer.borrow_mut();
                    ptr.mouse_down = true;
                    if let Some(tower) = handle.game.tower_at(p.x, p.y) {
                        ptr.held = Some(tower);
                        handle.dispatch(RunAction::Queue(Intent::BeginDrag { tower }));
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let mousemove_cb = {
                let pointer = pointer.clone();
                let run_state_ref_ct = run_state_ref.clone();
                let board_point = board_point.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let p = board_point(&e);
                    let handle = run_state_ref_ct.borrow().clone();
                    let ptr = pointer.borrow();
                    if let Some(tower) = ptr.dragging(handle.game.state().placement) {
                        handle.dispatch(RunAction::Queue(Intent::SetTowerPosition {
                            tower,
                            x: p.x,
                            y: p.y,
                        }));
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let mouseup_cb = {
                let pointer = pointer.clone();
                let run_state_ref_ct = run_state_ref.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    let handle = run_state_ref_ct.borrow().clone();
                    let mut ptr = pointer.borrow_mut();
                    if let Some(tower) = ptr.dragging(handle.game.state().placement) {
                        handle.dispatch(RunAction::Queue(Intent::FinalizePlacement { tower }));
                    }
                    ptr.release();
                }) as Box<dyn FnMut(_)>)
            };
            let mouseleave_cb = {
                let pointer = pointer.clone();
                let run_state_ref_ct = run_state_ref.clone();
                Closure::wrap(Box::new(move |_e: web_sys::MouseEvent| {
                    let handle = run_state_ref_ct.borrow().clone();
                    let mut ptr = pointer.borrow_mut();
                    if ptr.dragging(handle.game.state().placement).is_some() {
                        handle.dispatch(RunAction::Queue(Intent::CancelDrag));
                    }
                    ptr.release();
                }) as Box<dyn FnMut(_)>)
            };
            let click_cb = {
                let run_state_ref_ct = run_state_ref.clone();
                let board_point = board_point.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let p = board_point(&e);
                    let handle = run_state_ref_ct.borrow().clone();
                    if let Some(tower) = handle.game.tower_at(p.x, p.y) {
                        handle.dispatch(RunAction::Queue(Intent::Select { tower: Some(tower) }));
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let resize_cb = {
                let compute_and_apply_canvas_size = compute_and_apply_canvas_size.clone();
                let draw_ref = draw_ref_setup.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    compute_and_apply_canvas_size();
                    if let Some(f) = &*draw_ref.borrow() {
                        f();
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let canvas_listeners: [(&str, &Closure<dyn FnMut(web_sys::MouseEvent)>); 5] = [
                ("mousedown", &mousedown_cb),
                ("mousemove", &mousemove_cb),
                ("mouseup", &mouseup_cb),
                ("mouseleave", &mouseleave_cb),
                ("click", &click_cb),
            ];
            for (name, cb) in canvas_listeners {
                if canvas
                    .add_event_listener_with_callback(name, cb.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("could not attach {name} listener");
                }
            }
            if window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("could not attach resize listener");
            }
            let window_clone = window.clone();
            Box::new(move || {
                let canvas_listeners: [(&str, &Closure<dyn FnMut(web_sys::MouseEvent)>); 5] = [
                    ("mousedown", &mousedown_cb),
                    ("mousemove", &mousemove_cb),
                    ("mouseup", &mouseup_cb),
                    ("mouseleave", &mouseleave_cb),
                    ("click", &click_cb),
                ];
                for (name, cb) in canvas_listeners {
                    let _ = canvas.remove_event_listener_with_callback(name, cb.as_ref().unchecked_ref());
                }
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                // Breaks the loop closure's reference to itself
                closure_cell.borrow_mut().take();
            }) as Box<dyn FnOnce()>
        });
    }

    let snap = props.run_state.game.snapshot();
    let cfg = props.run_state.game.config();
    let selected = snap.selected_tower().cloned();
    let can_draw = !snap.game_over && !snap.victory && snap.gold >= cfg.draw_cost;

    let draw_cb: Callback<()> = {
        let run_state = props.run_state.clone();
        Callback::from(move |()| run_state.dispatch(RunAction::Intent(Intent::Draw)))
    };
    let upgrade_cb: Callback<()> = {
        let run_state = props.run_state.clone();
        let selected = selected.as_ref().map(|t| t.id);
        Callback::from(move |()| {
            if let Some(tower) = selected {
                run_state.dispatch(RunAction::Intent(Intent::Upgrade { tower }));
            }
        })
    };
    let can_upgrade = selected
        .as_ref()
        .is_some_and(|t| !snap.game_over && !snap.victory && snap.gold >= t.upgrade_cost);

    html! {<div style="position:relative; width:100vw; height:100vh;">
        <canvas ref={canvas_ref.clone()} id="game-canvas" style="display:block; width:100%; height:100%;"></canvas>
        <TimeDisplay phase={snap.phase} seconds_left={snap.seconds_left} />
        <StatsPanel stage={snap.stage} stage_max={snap.stage_max} gold={snap.gold} alive={snap.alive} max_alive={snap.max_alive} />
        <ControlsPanel draw_cost={cfg.draw_cost} can_draw={can_draw} on_draw={draw_cb} />
        <TowerPanel tower={selected} can_upgrade={can_upgrade} on_upgrade={upgrade_cb} />
        <GameOverOverlay show={snap.game_over || snap.victory} victory={snap.victory} status={snap.status.clone()} stage={snap.stage} restart={props.restart_run.clone()} />
    </div> }
}
