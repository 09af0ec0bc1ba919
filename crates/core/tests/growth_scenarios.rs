//! End-to-end fire growth scenarios on small synthetic terrains.
//!
//! These exercise the full seed-then-step path: ignition rectangle,
//! wind-driven directional spread, symmetric calm spread, and the
//! forecast-driven season loop.

use wildfire_sim_core::{FireStatus, Forecast, Grid, Simulator, WeatherRecord};

fn calm() -> WeatherRecord {
    WeatherRecord::wind_only(0.0, 0.0)
}

/// Ignited cell coordinates relative to a center.
fn ignited_offsets(sim: &Simulator, cx: i64, cy: i64) -> Vec<(i64, i64)> {
    let mut offsets: Vec<(i64, i64)> = sim
        .ignited()
        .iter()
        .map(|k| (i64::from(k.x()) - cx, i64::from(k.y()) - cy))
        .collect();
    offsets.sort_unstable();
    offsets
}

#[test]
fn seed_ignition_covers_the_central_block() {
    let mut sim = Simulator::new(Grid::flat(5, 5, 10.0, 10.0, 0));
    sim.start_fire(0.5, 0.5, 15.0).expect("seed ignition");

    assert_eq!(sim.ignited().len(), 9, "15 m radius on 10 m pitch is ±1 cell");
    for y in 1..=3 {
        for x in 1..=3 {
            assert_eq!(
                sim.status_at(x, y),
                FireStatus::Active,
                "cell ({x}, {y}) should burn with the full hour left"
            );
            assert_eq!(sim.grid().cell(x, y).time_remaining(), 1);
        }
    }

    // The perimeter hull covers exactly the seeded block
    let perimeter = sim.perimeter();
    assert!(!perimeter.is_empty());
    for &key in perimeter {
        assert!((1..=3).contains(&key.x()) && (1..=3).contains(&key.y()));
    }
}

#[test]
fn calm_growth_is_point_symmetric_about_the_seed() {
    let mut sim = Simulator::new(Grid::flat(5, 5, 10.0, 10.0, 0));
    sim.start_fire(0.5, 0.5, 15.0).expect("seed ignition");
    let summary = sim.step(&calm());

    for key in &summary.newly_ignited {
        let (x, y) = (i64::from(key.x()), i64::from(key.y()));
        let mirrored = summary
            .newly_ignited
            .iter()
            .any(|m| i64::from(m.x()) == 4 - x && i64::from(m.y()) == 4 - y);
        assert!(
            mirrored,
            "({x}, {y}) ignited without its mirror ({}, {})",
            4 - x,
            4 - y
        );
    }
}

#[test]
fn calm_flat_growth_is_symmetric_under_quarter_turns() {
    // 1 m pitch so the calm spread rate of a few m/hr covers whole cells
    let mut sim = Simulator::new(Grid::flat(41, 41, 1.0, 1.0, 0));
    sim.start_fire(0.5, 0.5, 2.0).expect("seed ignition");
    sim.step(&calm());
    sim.step(&calm());

    let offsets = ignited_offsets(&sim, 20, 20);
    assert!(offsets.len() > 25, "two calm hours should grow past the seed");
    for &(u, v) in &offsets {
        for rotated in [(-v, u), (-u, -v), (v, -u)] {
            assert!(
                offsets.binary_search(&rotated).is_ok(),
                "offset ({u}, {v}) ignited but its rotation {rotated:?} did not"
            );
        }
    }
}

#[test]
fn east_wind_drives_the_front_east() {
    let mut sim = Simulator::new(Grid::flat(3, 3, 10.0, 10.0, 0));
    sim.start_fire(0.5, 0.5, 0.0).expect("center cell only");
    assert_eq!(sim.ignited().len(), 1);

    sim.step(&WeatherRecord::wind_only(20.0, 0.0));

    let east_reach = sim
        .ignited()
        .iter()
        .map(|k| i64::from(k.x()) - 1)
        .max()
        .expect("ignited set is non-empty");
    let west_reach = sim
        .ignited()
        .iter()
        .map(|k| 1 - i64::from(k.x()))
        .max()
        .expect("ignited set is non-empty");
    assert!(
        east_reach >= west_reach,
        "east reach {east_reach} should cover at least the west reach {west_reach}"
    );
    assert_eq!(
        sim.status_at(2, 1),
        FireStatus::Active,
        "downwind neighbor ignites under 20 mph"
    );
    assert_eq!(
        sim.status_at(0, 1),
        FireStatus::Unburnt,
        "upwind neighbor sees a zero wind factor and sub-cell spread"
    );
}

#[test]
fn slope_stretches_growth_along_the_gradient() {
    // North-south ridge: slope lies along x, rows are level
    let mut sim = Simulator::new(Grid::ridge(41, 41, 10.0, 10.0, 0, 80));
    sim.start_fire(0.25, 0.5, 10.0).expect("seed on the west flank");
    sim.step(&calm());

    let offsets = ignited_offsets(&sim, 10, 20);
    let x_reach = offsets.iter().map(|&(u, _)| u.abs()).max().unwrap_or(0);
    let y_reach = offsets.iter().map(|&(_, v)| v.abs()).max().unwrap_or(0);
    assert!(
        x_reach > y_reach,
        "slope-driven spread ({x_reach} cells) should outrun level spread ({y_reach} cells)"
    );
}

#[test]
fn one_hour_fuel_burns_out_while_its_neighbors_catch() {
    let mut sim = Simulator::new(Grid::flat(9, 9, 1.0, 1.0, 0));
    sim.start_fire(0.5, 0.5, 0.0).expect("single cell");

    sim.step(&WeatherRecord::wind_only(5.0, 0.0));

    assert_eq!(
        sim.status_at(4, 4),
        FireStatus::Burnt,
        "grass has a one hour burn duration"
    );
    assert!(
        sim.active_count() > 0,
        "spread should hand the fire to at least one neighbor"
    );
}

#[test]
fn season_loop_consumes_the_forecast_and_stops() {
    let mut sim = Simulator::new(Grid::flat(31, 31, 1.0, 1.0, 0));
    sim.start_fire(0.5, 0.5, 2.0).expect("seed ignition");

    let mut forecast = Forecast::constant(WeatherRecord::wind_only(5.0, 45.0), 3);
    let mut hours = 0;
    while let Some(weather) = forecast.next_hour() {
        let summary = sim.step(weather);
        hours += 1;
        assert_eq!(summary.hour, hours);
    }
    assert_eq!(hours, 3, "three forecast hours drive three steps");
    assert_eq!(sim.hour(), 3);
    assert!(forecast.next_hour().is_none(), "forecast stays exhausted");
}

#[test]
fn identical_inputs_step_identically() {
    let build = || {
        let mut sim = Simulator::new(Grid::ridge(25, 25, 1.0, 1.0, 0, 10));
        sim.start_fire(0.4, 0.6, 2.0).expect("seed ignition");
        sim
    };
    let mut a = build();
    let mut b = build();
    for _ in 0..3 {
        let wind = WeatherRecord::wind_only(8.0, 120.0);
        let sa = a.step(&wind);
        let sb = b.step(&wind);
        assert_eq!(sa.newly_ignited, sb.newly_ignited);
        assert_eq!(sa.perimeter, sb.perimeter);
        assert_eq!(sa.active_count, sb.active_count);
    }
}
