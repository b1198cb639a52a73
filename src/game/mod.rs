//! Browser shell: canvas setup, pointer/touch input, DOM overlays, and all
//! drawing. Presentation only — every frame reads the [`world::World`] and
//! renders it; game state changes flow exclusively through the world's
//! `update`/`pointer_*` entry points.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, window};

pub mod actors;
pub mod audio;
pub mod config;
pub mod delivery;
pub mod dialogue;
pub mod geometry;
pub mod rng;
pub mod scheduler;
pub mod session;
pub mod world;

use crate::{GAME_HEIGHT, GAME_WIDTH};
use actors::{CAT_SIZE, Cat, ITEM_SIZE, Item};
use config::GameConfig;
use session::Phase;
use world::{CARETAKER_H, CARETAKER_W, CARETAKER_X, CARETAKER_Y, SpeechBubble, World};

struct Shell {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    world: World,
}

thread_local! {
    static GAME: std::cell::RefCell<Option<Shell>> = std::cell::RefCell::new(None);
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Create (or re-use) the game canvas, wire up input and overlays, and start
/// the frame loop with the given tuning.
pub fn launch(config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let existing = doc.get_element_by_id("hc-game-canvas");
    let fresh = existing.is_none();
    let canvas: HtmlCanvasElement = if let Some(el) = existing {
        el.dyn_into()?
    } else {
        let c: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
        c.set_id("hc-game-canvas");
        c.set_width(GAME_WIDTH);
        c.set_height(GAME_HEIGHT);
        c.set_attribute("style", "position:fixed; left:50%; top:50%; transform:translate(-50%,-50%); max-height:96vh; aspect-ratio:400/700; box-shadow:0 0 32px 0 rgba(0,0,0,0.18); border-radius:12px; border:2px solid #5b4636; background:#FDF3E3; touch-action:none; cursor:grab; z-index:20;").ok();
        doc.body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&c)?;
        c
    };
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;
    ctx.set_text_align("center");

    let seed = performance_now().to_bits() ^ 0x9E37_79B9_7F4A_7C15;
    let world = World::new(config, seed);
    GAME.with(|cell| {
        cell.replace(Some(Shell {
            canvas: canvas.clone(),
            ctx,
            world,
        }))
    });

    ensure_hud(&doc)?;
    if fresh {
        install_pointer_listeners(&doc, &canvas)?;
        install_sound_toggle(&doc)?;
        start_frame_loop();
    }
    Ok(())
}

// --- Input -------------------------------------------------------------------

/// Translate client coordinates into the 400x700 logical space, compensating
/// for CSS scaling of the canvas element.
fn logical_pos(canvas: &HtmlCanvasElement, client_x: f64, client_y: f64) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return (0.0, 0.0);
    }
    let scale_x = canvas.width() as f64 / rect.width();
    let scale_y = canvas.height() as f64 / rect.height();
    (
        (client_x - rect.left()) * scale_x,
        (client_y - rect.top()) * scale_y,
    )
}

fn with_world(f: impl FnOnce(&HtmlCanvasElement, &mut World)) {
    GAME.with(|cell| {
        if let Some(shell) = cell.borrow_mut().as_mut() {
            f(&shell.canvas, &mut shell.world);
        }
    });
}

fn install_pointer_listeners(doc: &Document, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    // Mouse: press on the canvas, but track move/release on the document so
    // a drag that leaves the canvas still resolves.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            with_world(|canvas, world| {
                let (x, y) = logical_pos(canvas, evt.client_x() as f64, evt.client_y() as f64);
                world.pointer_down(x, y, performance_now());
            });
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
            with_world(|canvas, world| {
                let (x, y) = logical_pos(canvas, evt.client_x() as f64, evt.client_y() as f64);
                world.pointer_move(x, y);
            });
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
            with_world(|_, world| world.pointer_up(performance_now()));
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch mirrors the mouse path with the first touch point.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            if let Some(touch) = evt.touches().get(0) {
                with_world(|canvas, world| {
                    let (x, y) =
                        logical_pos(canvas, touch.client_x() as f64, touch.client_y() as f64);
                    world.pointer_down(x, y, performance_now());
                });
            }
        }) as Box<dyn FnMut(_)>);
        canvas.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            if let Some(touch) = evt.touches().get(0) {
                with_world(|canvas, world| {
                    let (x, y) =
                        logical_pos(canvas, touch.client_x() as f64, touch.client_y() as f64);
                    world.pointer_move(x, y);
                });
            }
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::TouchEvent| {
            evt.prevent_default();
            with_world(|_, world| world.pointer_up(performance_now()));
        }) as Box<dyn FnMut(_)>);
        doc.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

// --- DOM overlays --------------------------------------------------------------

fn ensure_div(doc: &Document, id: &str, style: &str, text: &str) -> Result<(), JsValue> {
    if doc.get_element_by_id(id).is_none()
        && let Some(body) = doc.body()
    {
        let div = doc.create_element("div")?;
        div.set_id(id);
        div.set_text_content(Some(text));
        div.set_attribute("style", style).ok();
        body.append_child(&div)?;
    }
    Ok(())
}

const HUD_STYLE: &str = "position:fixed; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45; letter-spacing:0.5px;";

fn ensure_hud(doc: &Document) -> Result<(), JsValue> {
    ensure_div(
        doc,
        "hc-score",
        &format!("{HUD_STYLE} top:10px; left:12px;"),
        "Score: 0",
    )?;
    ensure_div(
        doc,
        "hc-timer",
        &format!("{HUD_STYLE} top:10px; left:130px;"),
        "Time: 0s",
    )?;
    ensure_div(
        doc,
        "hc-level",
        &format!("{HUD_STYLE} top:10px; left:250px;"),
        "Level: 1",
    )?;
    Ok(())
}

fn install_sound_toggle(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id("hc-sound").is_some() {
        return Ok(());
    }
    let Some(body) = doc.body() else {
        return Ok(());
    };
    let btn = doc.create_element("button")?;
    btn.set_id("hc-sound");
    btn.set_text_content(Some("\u{1F50A}"));
    btn.set_attribute("style", "position:fixed; top:10px; right:12px; font-size:18px; padding:4px 10px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; cursor:pointer; z-index:45;").ok();
    let closure = Closure::wrap(Box::new(move || {
        let muted = audio::toggle_mute();
        if let Some(doc) = window().and_then(|w| w.document())
            && let Some(el) = doc.get_element_by_id("hc-sound")
        {
            el.set_text_content(Some(if muted { "\u{1F507}" } else { "\u{1F50A}" }));
        }
    }) as Box<dyn FnMut()>);
    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    body.append_child(&btn)?;
    Ok(())
}

fn update_hud(world: &World) {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = doc.get_element_by_id("hc-score") {
        el.set_text_content(Some(&format!("Score: {}", world.session.score())));
    }
    if let Some(el) = doc.get_element_by_id("hc-timer") {
        el.set_text_content(Some(&format!("Time: {}s", world.session.time_left())));
    }
    if let Some(el) = doc.get_element_by_id("hc-level") {
        el.set_text_content(Some(&format!("Level: {}", world.session.level())));
    }
}

// --- Frame loop -------------------------------------------------------------------

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        GAME.with(|cell| {
            if let Some(shell) = cell.borrow_mut().as_mut() {
                frame(shell, ts);
            }
        });
        if let Some(w) = window() {
            let _ =
                w.request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn frame(shell: &mut Shell, now: f64) {
    shell.world.update(now);
    for cue in shell.world.drain_cues() {
        audio::play(cue);
    }
    render(&shell.ctx, &shell.canvas, &shell.world, now);
    update_hud(&shell.world);
}

// --- Rendering ----------------------------------------------------------------------

const WALL_SPLIT: f64 = 320.0;

fn render(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement, world: &World, now: f64) {
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, w, h);

    draw_room(ctx, w, h);
    draw_caretaker(ctx);
    for cat in &world.cats {
        draw_cat(ctx, cat, now);
    }
    // Dragged item last so it rides above everything else on the floor.
    for item in &world.items {
        if !item.dragging {
            draw_item(ctx, item);
        }
    }
    if let Some(item) = world.dragged_item() {
        draw_item(ctx, item);
    }
    for bubble in &world.bubbles {
        draw_bubble(ctx, bubble);
    }

    match world.session.phase() {
        Phase::Ready => draw_ready_overlay(ctx, w, h, now),
        Phase::Ended => draw_ended_overlay(ctx, w, h, world),
        Phase::Playing => {}
    }
}

fn draw_room(ctx: &CanvasRenderingContext2d, w: f64, h: f64) {
    ctx.set_fill_style_str("#E8DCC8");
    ctx.fill_rect(0.0, 0.0, w, WALL_SPLIT);
    ctx.set_fill_style_str("#C9A063");
    ctx.fill_rect(0.0, WALL_SPLIT, w, h - WALL_SPLIT);
    ctx.set_stroke_style_str("#8a6d3b");
    ctx.set_line_width(3.0);
    ctx.begin_path();
    ctx.move_to(0.0, WALL_SPLIT);
    ctx.line_to(w, WALL_SPLIT);
    ctx.stroke();

    // Window on the wall.
    ctx.set_fill_style_str("#BBD9EE");
    ctx.fill_rect(40.0, 60.0, 110.0, 130.0);
    ctx.set_stroke_style_str("#7a5c3e");
    ctx.set_line_width(5.0);
    ctx.stroke_rect(40.0, 60.0, 110.0, 130.0);
    ctx.begin_path();
    ctx.move_to(95.0, 60.0);
    ctx.line_to(95.0, 190.0);
    ctx.move_to(40.0, 125.0);
    ctx.line_to(150.0, 125.0);
    ctx.stroke();

    // Rug where the cats lounge.
    ctx.set_fill_style_str("rgba(179,84,47,0.45)");
    ctx.begin_path();
    ctx.ellipse(130.0, 500.0, 120.0, 70.0, 0.0, 0.0, std::f64::consts::TAU)
        .ok();
    ctx.fill();

    // Tray under the bowls.
    ctx.set_fill_style_str("rgba(90,60,30,0.35)");
    ctx.fill_rect(28.0, 610.0, 170.0, 80.0);
}

fn draw_caretaker(ctx: &CanvasRenderingContext2d) {
    let cx = CARETAKER_X + CARETAKER_W / 2.0;
    // Dress.
    ctx.set_fill_style_str("#B06AB3");
    ctx.begin_path();
    ctx.move_to(cx, CARETAKER_Y + 60.0);
    ctx.line_to(cx - 55.0, CARETAKER_Y + CARETAKER_H - 20.0);
    ctx.line_to(cx + 55.0, CARETAKER_Y + CARETAKER_H - 20.0);
    ctx.close_path();
    ctx.fill();
    // Head and hair.
    ctx.set_fill_style_str("#4a3123");
    ctx.begin_path();
    ctx.arc(cx, CARETAKER_Y + 34.0, 32.0, 0.0, std::f64::consts::TAU).ok();
    ctx.fill();
    ctx.set_fill_style_str("#F5D7B8");
    ctx.begin_path();
    ctx.arc(cx, CARETAKER_Y + 40.0, 26.0, 0.0, std::f64::consts::TAU).ok();
    ctx.fill();
    ctx.set_fill_style_str("#2b1d12");
    ctx.begin_path();
    ctx.arc(cx - 9.0, CARETAKER_Y + 36.0, 3.0, 0.0, std::f64::consts::TAU).ok();
    ctx.arc(cx + 9.0, CARETAKER_Y + 36.0, 3.0, 0.0, std::f64::consts::TAU).ok();
    ctx.fill();

    ctx.set_fill_style_str("black");
    ctx.set_font("bold 16px Arial");
    ctx.fill_text("Mama", cx, CARETAKER_Y + CARETAKER_H + 4.0).ok();
}

fn draw_cat(ctx: &CanvasRenderingContext2d, cat: &Cat, now: f64) {
    let (x, y) = (cat.x, cat.y);
    // Ears.
    ctx.set_fill_style_str(cat.color);
    ctx.begin_path();
    ctx.move_to(x + 8.0, y + 18.0);
    ctx.line_to(x + 18.0, y - 4.0);
    ctx.line_to(x + 30.0, y + 12.0);
    ctx.move_to(x + CAT_SIZE - 8.0, y + 18.0);
    ctx.line_to(x + CAT_SIZE - 18.0, y - 4.0);
    ctx.line_to(x + CAT_SIZE - 30.0, y + 12.0);
    ctx.close_path();
    ctx.fill();
    // Body.
    rounded_rect(ctx, x, y, CAT_SIZE, CAT_SIZE, 18.0);
    ctx.fill();
    // Eyes: closed and content while satisfied, round otherwise.
    if cat.satisfied {
        ctx.set_stroke_style_str("#111");
        ctx.set_line_width(3.0);
        ctx.begin_path();
        ctx.arc(x + 22.0, y + 30.0, 6.0, 0.2, std::f64::consts::PI - 0.2).ok();
        ctx.stroke();
        ctx.begin_path();
        ctx.arc(x + 48.0, y + 30.0, 6.0, 0.2, std::f64::consts::PI - 0.2).ok();
        ctx.stroke();
    } else {
        ctx.set_fill_style_str("#FFF");
        ctx.begin_path();
        ctx.arc(x + 22.0, y + 30.0, 8.0, 0.0, std::f64::consts::TAU).ok();
        ctx.arc(x + 48.0, y + 30.0, 8.0, 0.0, std::f64::consts::TAU).ok();
        ctx.fill();
        ctx.set_fill_style_str("#111");
        ctx.begin_path();
        ctx.arc(x + 22.0, y + 31.0, 3.5, 0.0, std::f64::consts::TAU).ok();
        ctx.arc(x + 48.0, y + 31.0, 3.5, 0.0, std::f64::consts::TAU).ok();
        ctx.fill();
    }
    // Nose and whiskers.
    ctx.set_fill_style_str("#E77");
    ctx.begin_path();
    ctx.arc(x + 35.0, y + 42.0, 3.0, 0.0, std::f64::consts::TAU).ok();
    ctx.fill();
    ctx.set_stroke_style_str("rgba(0,0,0,0.6)");
    ctx.set_line_width(1.5);
    ctx.begin_path();
    ctx.move_to(x + 28.0, y + 44.0);
    ctx.line_to(x + 8.0, y + 40.0);
    ctx.move_to(x + 28.0, y + 48.0);
    ctx.line_to(x + 8.0, y + 52.0);
    ctx.move_to(x + 42.0, y + 44.0);
    ctx.line_to(x + 62.0, y + 40.0);
    ctx.move_to(x + 42.0, y + 48.0);
    ctx.line_to(x + 62.0, y + 52.0);
    ctx.stroke();

    ctx.set_fill_style_str("black");
    ctx.set_font("bold 14px Arial");
    ctx.fill_text(cat.name, x + CAT_SIZE / 2.0, y + CAT_SIZE + 20.0).ok();

    // Bouncing need badge, as long as the request is open.
    if let Some(need) = cat.need {
        let bounce = (now * 0.005).sin() * 3.0;
        let bx = x + CAT_SIZE - 15.0;
        let by = y + 15.0 + bounce;
        ctx.set_fill_style_str(need.badge_color());
        ctx.begin_path();
        ctx.arc(bx, by, 14.0, 0.0, std::f64::consts::TAU).ok();
        ctx.fill();
        ctx.set_stroke_style_str("#FFF");
        ctx.set_line_width(2.0);
        ctx.begin_path();
        ctx.arc(bx, by, 14.0, 0.0, std::f64::consts::TAU).ok();
        ctx.stroke();
        ctx.set_font("bold 18px Arial");
        ctx.stroke_text(need.glyph(), bx, by + 9.0).ok();
        ctx.fill_text(need.glyph(), bx, by + 9.0).ok();
    }
}

fn draw_item(ctx: &CanvasRenderingContext2d, item: &Item) {
    ctx.save();
    let (mut x, mut y, mut size) = (item.x, item.y, ITEM_SIZE);
    if item.dragging {
        ctx.set_global_alpha(0.8);
        size *= 1.1;
        x -= ITEM_SIZE * 0.05;
        y -= ITEM_SIZE * 0.05;
    }
    let color = item.kind.badge_color();
    // Bowl body.
    ctx.set_fill_style_str("#7a5c3e");
    ctx.begin_path();
    ctx.ellipse(
        x + size / 2.0,
        y + size * 0.7,
        size / 2.0,
        size * 0.3,
        0.0,
        0.0,
        std::f64::consts::TAU,
    )
    .ok();
    ctx.fill();
    // Contents.
    ctx.set_fill_style_str(color);
    ctx.begin_path();
    ctx.ellipse(
        x + size / 2.0,
        y + size * 0.55,
        size * 0.38,
        size * 0.18,
        0.0,
        0.0,
        std::f64::consts::TAU,
    )
    .ok();
    ctx.fill();
    ctx.set_font("bold 24px Arial");
    ctx.fill_text(item.kind.glyph(), x + size / 2.0, y + size * 0.45).ok();
    ctx.restore();
}

fn draw_bubble(ctx: &CanvasRenderingContext2d, bubble: &SpeechBubble) {
    ctx.set_font("bold 12px Arial");
    let text = match bubble.icon {
        Some(need) => format!("{} {}", need.glyph(), bubble.text),
        None => bubble.text.to_string(),
    };
    let tw = ctx
        .measure_text(&text)
        .map(|m| m.width())
        .unwrap_or(120.0);
    let bw = (tw + 20.0).clamp(60.0, 340.0);
    let bh = 26.0;
    let bx = bubble.x.clamp(bw / 2.0 + 4.0, GAME_WIDTH as f64 - bw / 2.0 - 4.0);
    let top = bubble.y - bh - 10.0;

    ctx.set_fill_style_str(bubble.color);
    ctx.set_stroke_style_str("#333");
    ctx.set_line_width(2.0);
    rounded_rect(ctx, bx - bw / 2.0, top, bw, bh, 10.0);
    ctx.fill();
    ctx.stroke();
    // Tail pointing at the speaker.
    ctx.begin_path();
    ctx.move_to(bubble.x - 6.0, top + bh - 1.0);
    ctx.line_to(bubble.x, bubble.y);
    ctx.line_to(bubble.x + 6.0, top + bh - 1.0);
    ctx.close_path();
    ctx.fill();
    ctx.stroke();

    ctx.set_fill_style_str("#222");
    ctx.fill_text(&text, bx, top + 17.0).ok();
}

fn draw_ready_overlay(ctx: &CanvasRenderingContext2d, w: f64, h: f64, now: f64) {
    ctx.set_fill_style_str("rgba(0,0,0,0.55)");
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str("#FFF");
    ctx.set_font("bold 30px Arial");
    ctx.fill_text("\u{1F431} Hungry Cats \u{1F431}", w / 2.0, 270.0).ok();
    ctx.set_font("15px Arial");
    ctx.fill_text("Drag food and water to the cat that asks!", w / 2.0, 315.0)
        .ok();
    ctx.fill_text("Every correct delivery buys you more time.", w / 2.0, 340.0)
        .ok();
    let pulse = ((now * 0.003).sin() * 0.5 + 0.5) * 0.6 + 0.4;
    ctx.set_fill_style_str(&format!("rgba(255,209,102,{pulse:.2})"));
    ctx.set_font("bold 20px Arial");
    ctx.fill_text("Tap to start", w / 2.0, 400.0).ok();
}

fn draw_ended_overlay(ctx: &CanvasRenderingContext2d, w: f64, h: f64, world: &World) {
    ctx.set_fill_style_str("rgba(0,0,0,0.7)");
    ctx.fill_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str("#FFF");
    ctx.set_font("bold 36px Arial");
    ctx.fill_text("Game Over", w / 2.0, 290.0).ok();
    ctx.set_font("bold 20px Arial");
    ctx.fill_text(
        &format!("Final score: {}", world.session.score()),
        w / 2.0,
        335.0,
    )
    .ok();
    ctx.fill_text(&format!("Level: {}", world.session.level()), w / 2.0, 365.0)
        .ok();
    ctx.set_font("16px Arial");
    let verdict = match world.session.score() {
        s if s >= 20 => "\u{2B50} Amazing run!",
        s if s >= 10 => "\u{1F44F} Nicely played!",
        _ => "\u{1F4AA} Try again!",
    };
    ctx.fill_text(verdict, w / 2.0, 400.0).ok();
    ctx.set_fill_style_str("#ffd166");
    ctx.set_font("bold 18px Arial");
    ctx.fill_text("Tap to continue", w / 2.0, 445.0).ok();
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.line_to(x + w - r, y);
    ctx.quadratic_curve_to(x + w, y, x + w, y + r);
    ctx.line_to(x + w, y + h - r);
    ctx.quadratic_curve_to(x + w, y + h, x + w - r, y + h);
    ctx.line_to(x + r, y + h);
    ctx.quadratic_curve_to(x, y + h, x, y + h - r);
    ctx.line_to(x, y + r);
    ctx.quadratic_curve_to(x, y, x + r, y);
    ctx.close_path();
}
