//! Structural invariants of the fire state, checked over multi-hour runs:
//! monotone cell transitions, non-shrinking ignited set, and the convex
//! counter-clockwise perimeter.

use wildfire_sim_core::{cross, FireStatus, Grid, GridPoint, Simulator, WeatherRecord};

fn status_rank(status: FireStatus) -> u8 {
    match status {
        FireStatus::Unburnt => 0,
        FireStatus::Active => 1,
        FireStatus::Burnt => 2,
    }
}

fn status_snapshot(sim: &Simulator) -> Vec<u8> {
    let (w, h) = (sim.grid().width(), sim.grid().height());
    let mut ranks = Vec::with_capacity(w as usize * h as usize);
    for y in 0..h {
        for x in 0..w {
            ranks.push(status_rank(sim.status_at(x, y)));
        }
    }
    ranks
}

fn perimeter_points(sim: &Simulator) -> Vec<GridPoint> {
    sim.perimeter()
        .iter()
        .map(|k| GridPoint::new(i64::from(k.x()), i64::from(k.y())))
        .collect()
}

#[test]
fn cell_states_only_move_forward() {
    let mut sim = Simulator::new(Grid::ridge(31, 31, 1.0, 1.0, 0, 15));
    sim.start_fire(0.5, 0.5, 2.0).expect("seed ignition");

    let mut before = status_snapshot(&sim);
    for hour in 0..5 {
        sim.step(&WeatherRecord::wind_only(6.0, 30.0));
        let after = status_snapshot(&sim);
        for (i, (&was, &now)) in before.iter().zip(&after).enumerate() {
            assert!(
                now >= was,
                "cell {i} regressed from rank {was} to {now} at hour {hour}"
            );
        }
        before = after;
    }
}

#[test]
fn ignited_set_and_area_never_shrink() {
    let mut sim = Simulator::new(Grid::flat(31, 31, 1.0, 1.0, 0));
    sim.start_fire(0.5, 0.5, 1.0).expect("seed ignition");

    let mut count = sim.ignited().len();
    let mut area = sim.area_m2();
    for _ in 0..5 {
        sim.step(&WeatherRecord::wind_only(3.0, 200.0));
        assert!(sim.ignited().len() >= count);
        assert!(sim.area_m2() >= area);
        count = sim.ignited().len();
        area = sim.area_m2();
    }
}

#[test]
fn perimeter_stays_convex_and_counter_clockwise() {
    let mut sim = Simulator::new(Grid::flat(41, 41, 1.0, 1.0, 0));
    sim.start_fire(0.5, 0.5, 2.0).expect("seed ignition");

    for hour in 0..4 {
        sim.step(&WeatherRecord::wind_only(4.0, 315.0));
        let hull = perimeter_points(&sim);
        if hull.len() < 3 {
            continue;
        }
        let n = hull.len();
        for i in 0..n {
            let turn = cross(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
            assert!(
                turn >= 0,
                "hour {hour}: clockwise turn {turn} at perimeter vertex {i}"
            );
        }
    }
}

#[test]
fn perimeter_starts_at_the_lowest_then_leftmost_cell() {
    let mut sim = Simulator::new(Grid::flat(41, 41, 1.0, 1.0, 0));
    sim.start_fire(0.4, 0.4, 3.0).expect("seed ignition");

    for _ in 0..3 {
        sim.step(&WeatherRecord::wind_only(10.0, 45.0));
        let hull = perimeter_points(&sim);
        if hull.is_empty() {
            continue;
        }
        let anchor = hull
            .iter()
            .map(|p| (p.y, p.x))
            .min()
            .expect("hull is non-empty");
        assert_eq!((hull[0].y, hull[0].x), anchor);
    }
}

#[test]
fn perimeter_vertices_belong_to_the_ignited_set() {
    let mut sim = Simulator::new(Grid::flat(31, 31, 1.0, 1.0, 0));
    sim.start_fire(0.5, 0.5, 2.0).expect("seed ignition");

    for _ in 0..4 {
        sim.step(&WeatherRecord::wind_only(7.0, 90.0));
        for &key in sim.perimeter() {
            assert!(
                sim.ignited().contains(&key),
                "perimeter vertex ({}, {}) never ignited",
                key.x(),
                key.y()
            );
        }
    }
}
