//! Lay out a track and print where every tile lands.
//!
//! Run with: cargo run --example oval_track --features tracing [config.json]

use miette::IntoDiagnostic;
use trackline::path::{arrow_tip_path, curved_element_enlarged_path};
use trackline::{Direction, TileModel, TileType, Track, TrackOptions, Vector2D};

fn default_track() -> Track {
    let mut track = Track::default();
    let tiles = track.tiles_mut();
    for _ in 0..2 {
        tiles.append(TileType::Straight, Direction::Right, 2.0);
        tiles.append(TileType::CurvedEnlarged, Direction::Right, 1.0);
        tiles.append(TileType::CurvedEnlarged, Direction::Right, 1.0);
    }
    track.set_options(TrackOptions {
        h_padding: 20.0,
        v_padding: 20.0,
        ..TrackOptions::default()
    });
    track
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let track = match std::env::args().nth(1) {
        Some(path) => Track::from_json(&std::fs::read_to_string(&path).into_diagnostic()?)?,
        None => default_track(),
    };

    let layout = track.build();
    println!(
        "track {} tiles, box ({}, {}) {} x {}",
        layout.tiles.len(),
        layout.x,
        layout.y,
        layout.width,
        layout.height
    );

    let specs = track.specs().get();
    for placed in &layout.tiles {
        let rect = placed.rect;
        println!(
            "{:>8} {:<16} {:<5} x{:<4} ({:.1}, {:.1}) {:>5.1}° -> ({:.1}, {:.1}) {:>5.1}°",
            placed.id,
            placed.kind,
            placed.direction,
            placed.ratio,
            rect.input.x,
            rect.input.y,
            rect.input.angle,
            rect.output.x,
            rect.output.y,
            rect.output.angle,
        );

        // direction marker in the middle of the entry edge
        let marker = arrow_tip_path(
            placed.x,
            placed.y,
            specs.barrier_length(),
            specs.lane_width() / 4.0,
            placed.angle,
        );
        println!("         marker  {marker}");

        if let TileModel::CurvedEnlarged(tile) = &placed.model {
            let turn = placed.direction.sign();
            let centre = Vector2D::new(0.0, turn * tile.radius())
                .rotate(placed.angle, None)
                .add_coord(placed.x, placed.y);
            // the band is drawn clockwise from the +x axis
            let rotation = match placed.direction {
                Direction::Right => placed.angle - 90.0,
                Direction::Left => placed.angle,
            };
            let band = curved_element_enlarged_path(
                centre.x,
                centre.y,
                specs.width(),
                tile.radius(),
                tile.addition(),
                rotation,
            );
            println!("         band    {band}");
        }
    }

    println!("{}", track.tiles().export_json()?);
    Ok(())
}
