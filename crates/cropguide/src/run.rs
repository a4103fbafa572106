// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use cropguide_core::colour::parse_hex_colour;
use cropguide_core::{ActiveEdge, GridMode, GuideVariant, Overlay, OverlayConfig, Point, Rect};
use cropguide_matte::{remove_background, PrecomputedMask};
use cropguide_render::{draw_overlay, PixmapSurface};
use eventline::{debug, info, warn};
use image::Rgba;

use crate::cli::{Args, BoxArgs, Cmd};
use crate::{config, paths};

pub fn run(args: Args) -> Result<(), String> {
    // config
    let config_path = args.config.unwrap_or_else(paths::default_config_path);
    debug!("config path: {}", config_path.display());

    let cfg = config::load(&config_path)?;
    debug!("config: {:?}", cfg);

    match args.cmd {
        Cmd::Render {
            bx,
            edge,
            grid,
            guide,
            no_guide,
            margin,
            background,
            output,
        } => {
            let opts = RenderOpts {
                edge,
                grid,
                guide,
                no_guide,
                margin,
                background: &background,
            };
            render(cfg, &bx, &opts, &output)
        }

        Cmd::Hit { bx, x, y } => hit(cfg, &bx, Point::new(x, y)),

        Cmd::Matte {
            image,
            mask,
            fill,
            output,
        } => matte(&image, &mask, &fill, &output),
    }
}

struct RenderOpts<'a> {
    edge: ActiveEdge,
    grid: Option<GridMode>,
    guide: Option<GuideVariant>,
    no_guide: bool,
    margin: f64,
    background: &'a str,
}

fn overlay_for(mut cfg: OverlayConfig, bx: &BoxArgs) -> Result<Overlay, String> {
    // cli overrides beat the config file
    if let Some(style) = bx.style {
        cfg.style = style;
    }
    if bx.locked {
        cfg.disable_deformation = true;
    }

    let bounds = Rect::new(0.0, 0.0, bx.width, bx.height);
    if bounds.is_empty() {
        return Err(format!("crop box must be non-empty (got {}x{})", bx.width, bx.height));
    }

    let mut overlay = Overlay::new(cfg);
    overlay.on_redraw(|t| {
        debug!("redraw requested (generation {})", t.generation);
    });
    let _ = overlay.set_bounds(bounds);
    Ok(overlay)
}

fn render(mut cfg: OverlayConfig, bx: &BoxArgs, opts: &RenderOpts<'_>, output: &Path) -> Result<(), String> {
    if let Some(variant) = opts.guide {
        cfg.guide_variant = variant;
    }
    if opts.no_guide {
        cfg.show_guide = false;
    }

    let backdrop = parse_hex_colour(opts.background).map_err(|e| format!("--background: {e}"))?;
    let mut overlay = overlay_for(cfg, bx)?;

    if let Some(mode) = opts.grid {
        let _ = overlay.set_grid_mode(mode);
        let _ = overlay.set_grid_hidden(false);
    }
    // Touching resets the grid to crop lines, so an explicit --grid loses to --edge.
    if overlay.handle_touched(opts.edge).is_some() && opts.grid.is_some() {
        warn!("--grid ignored: engaging a handle resets the grid to crop lines");
    }

    // canvas: crop box plus margin on every side
    let margin = opts.margin.max(0.0);
    let w = (bx.width + 2.0 * margin).ceil() as u32;
    let h = (bx.height + 2.0 * margin).ceil() as u32;

    let mut surface = PixmapSurface::new(w, h)
        .map_err(|e| format!("{e}"))?
        .with_origin(margin, margin);
    surface.clear(backdrop);

    draw_overlay(&mut surface, overlay.snapshot());

    // save
    paths::ensure_parent_dir(output).map_err(|e| format!("create output dir: {e}"))?;
    surface.save_png(output).map_err(|e| format!("{e}"))?;

    info!("rendered {}x{} overlay to {}", w, h, output.display());
    println!("saved to: {}", output.display());
    Ok(())
}

fn hit(cfg: OverlayConfig, bx: &BoxArgs, p: Point) -> Result<(), String> {
    let overlay = overlay_for(cfg, bx)?;

    // overlapping zones resolve to the first registered (corners first)
    let hits: Vec<_> = overlay.hot_zones().matches(p).map(|z| z.handle).collect();
    if hits.len() > 1 {
        debug!("{} zones overlap at ({}, {}): {:?}", hits.len(), p.x, p.y, hits);
    }

    match overlay.matched_zone(p) {
        Some(zone) => {
            let r = zone.rect;
            println!(
                "hit: {:?} zone ({}, {}) {}x{}",
                zone.handle, r.x, r.y, r.w, r.h
            );
        }
        None => println!("miss"),
    }

    debug!("contains_point({}, {}) = {}", p.x, p.y, overlay.contains_point(p));
    Ok(())
}

fn matte(image_path: &Path, mask_path: &Path, fill: &str, output: &Path) -> Result<(), String> {
    let fill = parse_hex_colour(fill).map_err(|e| format!("--fill: {e}"))?;
    let fill = Rgba([
        cropguide_core::colour::r(fill),
        cropguide_core::colour::g(fill),
        cropguide_core::colour::b(fill),
        cropguide_core::colour::a(fill),
    ]);

    // inputs
    let photo = image::open(image_path)
        .map_err(|e| format!("failed to open {}: {e}", image_path.display()))?
        .to_rgba8();
    let masker = PrecomputedMask::open(mask_path).map_err(|e| format!("{e}"))?;

    info!(
        "matte: {} ({}x{}) with mask {}",
        image_path.display(),
        photo.width(),
        photo.height(),
        mask_path.display()
    );

    // composite + save
    let out = remove_background(&photo, &masker, fill).map_err(|e| format!("{e}"))?;

    paths::ensure_parent_dir(output).map_err(|e| format!("create output dir: {e}"))?;
    out.save(output)
        .map_err(|e| format!("failed to write {}: {e}", output.display()))?;

    println!("saved to: {}", output.display());
    Ok(())
}
