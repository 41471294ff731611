//! Headless validation harness for the farm engine.
//!
//! Drives seeded engines and forced-RNG slots through full scenarios and
//! checks the results against the rulebook numbers, without any renderer
//! or timer attached.
//!
//! Usage:
//!   cargo run -p harvest-simtest
//!   cargo run -p harvest-simtest -- --verbose
//!
//! Exit code 0 when every check passes, 1 otherwise.

use harvest_core::prelude::*;
use harvest_core::systems::{harvest_slot, step_slot, TickRates};
use harvest_logic::constants::{GROWTH_MAX, WATER_MAX};
use harvest_logic::economy::{
    effective_quality, growth_rate, next_upgrade_price, price_per_fruit, reserve_amount,
    sellable_stock, water_cost, yield_per_cycle,
};
use harvest_logic::hydration::water_death_chance;
use harvest_logic::plague::{kill_chance, onset_chance, stress_score};
use rand::rngs::mock::StepRng;

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

// StepRng(0, 0) makes every gen_bool(p > 0) hit; StepRng(MAX, 0) makes
// every gen_bool(p < 1) miss.
fn always() -> StepRng {
    StepRng::new(0, 0)
}

fn never() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

fn main() {
    let verbose = std::env::args().any(|arg| arg == "--verbose");

    println!("=== Harvest Simulation Test ===\n");

    let mut results = Vec::new();
    results.extend(validate_economy(verbose));
    results.extend(validate_lifecycle(verbose));
    results.extend(validate_water_stress(verbose));
    results.extend(validate_plague(verbose));
    results.extend(validate_commands(verbose));
    results.extend(validate_reserve(verbose));
    results.extend(validate_automation(verbose));
    results.extend(validate_persistence(verbose));
    results.extend(validate_soak(verbose));

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );
    for result in &results {
        if !result.passed || verbose {
            let icon = if result.passed { "✓" } else { "✗" };
            println!("  {} {} - {}", icon, result.name, result.detail);
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Economy formulas ──────────────────────────────────────────────────

fn validate_economy(_verbose: bool) -> Vec<TestResult> {
    println!("--- Economy formulas ---");
    let mut results = Vec::new();

    let p2 = price_per_fruit(1.0, 2);
    let p3 = price_per_fruit(1.0, 3);
    results.push(TestResult {
        name: "fruit_price_scales_with_quality".into(),
        passed: (p2 - 1.5).abs() < 1e-9 && (p3 - 1.75).abs() < 1e-9,
        detail: format!("quality 2 -> {p2}, quality 3 -> {p3}"),
    });

    let g1 = growth_rate(1);
    let y: Vec<u32> = (0..4).map(yield_per_cycle).collect();
    results.push(TestResult {
        name: "growth_and_yield_tables".into(),
        passed: (g1 - 2.5).abs() < 1e-9 && y == vec![2, 3, 4, 4],
        detail: format!("growth rate L1 = {g1}, yields L0..L3 = {y:?}"),
    });

    let q = [
        next_upgrade_price(UpgradeKind::Quality, 0),
        next_upgrade_price(UpgradeKind::Quality, 1),
        next_upgrade_price(UpgradeKind::Quality, 2),
    ];
    results.push(TestResult {
        name: "quality_ladder_prices".into(),
        passed: q == [30.0, 66.0, 146.0],
        detail: format!("levels 0..2 -> {q:?}"),
    });

    // 50 * 2.2 lands just above 110 in doubles, so the ceil gives 111.
    let plot1 = next_upgrade_price(UpgradeKind::Plot, 1);
    results.push(TestResult {
        name: "plot_ladder_second_price".into(),
        passed: plot1 == 111.0,
        detail: format!("plot level 1 -> {plot1}"),
    });

    let mut ladder_ok = true;
    for kind in UpgradeKind::ALL {
        let mut prev = 0.0;
        for level in 0..15 {
            let price = next_upgrade_price(kind, level);
            if price <= prev {
                ladder_ok = false;
            }
            prev = price;
        }
    }
    results.push(TestResult {
        name: "upgrade_ladders_strictly_increase".into(),
        passed: ladder_ok,
        detail: "all four ladders, levels 0..15".into(),
    });

    let mut reserve_ok = true;
    for stock in 0..=10_000u32 {
        let reserve = reserve_amount(stock);
        if reserve != (stock + 9) / 10 || reserve + sellable_stock(stock) != stock {
            reserve_ok = false;
            break;
        }
    }
    results.push(TestResult {
        name: "reserve_is_ceil_tenth".into(),
        passed: reserve_ok,
        detail: "reserve + sellable == stock for 0..=10000".into(),
    });

    let cost = water_cost(20.0);
    let eq = effective_quality(1.0, 2);
    results.push(TestResult {
        name: "water_cost_and_quality_bonus".into(),
        passed: (cost - 0.2).abs() < 1e-9 && (eq - 1.5).abs() < 1e-9,
        detail: format!("20 water -> {cost}, quality bonus L2 -> {eq}"),
    });

    results
}

// ── 2. Plant lifecycle ───────────────────────────────────────────────────

/// A tended plant on forced-miss RNG is fully deterministic: sprout at
/// growth 25, ripe at 100, then stall until harvested.
fn validate_lifecycle(_verbose: bool) -> Vec<TestResult> {
    println!("--- Plant lifecycle ---");
    let mut results = Vec::new();

    let mut state = GameState::new();
    let rates = TickRates::of(&state);
    let mut rng = never();
    let mut events = Vec::new();

    let mut sprouted_at = None;
    let mut ripened_at = None;
    for t in 1..=200u64 {
        let slot = &mut state.field[0];
        if slot.water < 30.0 {
            slot.water = 90.0;
        }
        step_slot(0, slot, rates, &mut rng, &mut events);
        if sprouted_at.is_none() && state.field[0].stage == Stage::Growing {
            sprouted_at = Some(t);
        }
        if state.field[0].stage == Stage::Ripe {
            ripened_at = Some(t);
            break;
        }
    }

    results.push(TestResult {
        name: "seedling_sprouts_at_25".into(),
        passed: sprouted_at == Some(13),
        detail: format!("sprouted at tick {sprouted_at:?} (expected 13)"),
    });
    results.push(TestResult {
        name: "ripens_at_100_with_fruit".into(),
        passed: ripened_at == Some(50) && state.field[0].fruits == 2,
        detail: format!(
            "ripe at tick {ripened_at:?} with {} fruit",
            state.field[0].fruits
        ),
    });

    for _ in 0..3 {
        let slot = &mut state.field[0];
        if slot.water < 30.0 {
            slot.water = 90.0;
        }
        step_slot(0, slot, rates, &mut rng, &mut events);
    }
    results.push(TestResult {
        name: "ripe_plant_stalls_until_harvest".into(),
        passed: state.field[0].stage == Stage::Ripe
            && (state.field[0].growth - 100.0).abs() < 1e-9
            && state.field[0].fruits == 2,
        detail: format!(
            "after 3 extra ticks: growth {}, {} fruit",
            state.field[0].growth, state.field[0].fruits
        ),
    });

    let collected = harvest_slot(&mut state.field[0]);
    let restarted = state.field[0].clone();
    results.push(TestResult {
        name: "harvest_restarts_the_cycle".into(),
        passed: collected == 2
            && restarted.stage == Stage::Growing
            && (restarted.growth - 0.0).abs() < 1e-9
            && restarted.fruits == 0,
        detail: format!(
            "collected {collected}, slot back to {:?} at growth {}",
            restarted.stage, restarted.growth
        ),
    });

    let mut dry = PlantSlot::seedling();
    dry.stage = Stage::Growing;
    dry.water = 0.0;
    dry.growth = 10.0;
    step_slot(0, &mut dry, rates, &mut rng, &mut events);
    results.push(TestResult {
        name: "dehydrated_plant_withers".into(),
        passed: (dry.growth - 9.5).abs() < 1e-9 && dry.drought_ticks == 1 && dry.is_living(),
        detail: format!(
            "growth {} (was 10), drought counter {}",
            dry.growth, dry.drought_ticks
        ),
    });

    results.push(TestResult {
        name: "no_stray_events_on_miss_rng".into(),
        passed: events.is_empty(),
        detail: format!("{} events recorded", events.len()),
    });

    results
}

// ── 3. Water stress and death ────────────────────────────────────────────

fn validate_water_stress(_verbose: bool) -> Vec<TestResult> {
    println!("--- Water stress ---");
    let mut results = Vec::new();

    let c12 = water_death_chance(12);
    let mut curve_ok = (c12 - 0.06).abs() < 1e-9;
    let mut prev = 0.0;
    for counter in 12..=90 {
        let chance = water_death_chance(counter);
        if chance < prev || chance > 0.5 {
            curve_ok = false;
        }
        prev = chance;
    }
    curve_ok &= (water_death_chance(56) - 0.5).abs() < 1e-9;
    results.push(TestResult {
        name: "death_chance_curve".into(),
        passed: curve_ok,
        detail: format!("starts at {c12}, monotone, capped at 0.5 from counter 56"),
    });

    let rates = TickRates::of(&GameState::new());

    // Eleven ticks of drought: not lethal yet, even on forced RNG. The
    // forced onset roll does land, so the plant comes out plagued.
    let mut slot = PlantSlot::seedling();
    slot.stage = Stage::Growing;
    slot.water = 0.0;
    slot.growth = 50.0;
    slot.drought_ticks = 10;
    let mut events = Vec::new();
    step_slot(0, &mut slot, rates, &mut always(), &mut events);
    results.push(TestResult {
        name: "no_death_roll_below_limit".into(),
        passed: slot.is_living()
            && slot.drought_ticks == 11
            && slot.plague
            && events == vec![FieldEvent::PlagueStruck { index: 0 }],
        detail: format!(
            "counter {}, living {}, plagued {}",
            slot.drought_ticks,
            slot.is_living(),
            slot.plague
        ),
    });

    // One more tick reaches the limit and the forced roll kills.
    events.clear();
    step_slot(0, &mut slot, rates, &mut always(), &mut events);
    results.push(TestResult {
        name: "drought_death_at_limit".into(),
        passed: slot.stage == Stage::Dead
            && !slot.plague
            && slot.fruits == 0
            && (slot.growth - 0.0).abs() < 1e-9
            && events
                == vec![FieldEvent::PlantDied {
                    index: 0,
                    cause: DeathCause::Drought,
                }],
        detail: format!("stage {:?}, events {:?}", slot.stage, events),
    });

    let mut flooded = PlantSlot::seedling();
    flooded.stage = Stage::Growing;
    flooded.water = 100.0;
    flooded.growth = 50.0;
    flooded.flood_ticks = 11;
    events.clear();
    step_slot(2, &mut flooded, rates, &mut always(), &mut events);
    results.push(TestResult {
        name: "flood_death_reports_flood".into(),
        passed: flooded.stage == Stage::Dead
            && events
                == vec![FieldEvent::PlantDied {
                    index: 2,
                    cause: DeathCause::Flood,
                }],
        detail: format!("events {:?}", events),
    });

    // Both counters over the limit: drought is charged.
    let mut both = PlantSlot::seedling();
    both.stage = Stage::Growing;
    both.water = 0.0;
    both.growth = 50.0;
    both.drought_ticks = 13;
    both.flood_ticks = 13;
    events.clear();
    step_slot(5, &mut both, rates, &mut always(), &mut events);
    results.push(TestResult {
        name: "drought_wins_over_flood".into(),
        passed: matches!(
            events.first(),
            Some(FieldEvent::PlantDied {
                index: 5,
                cause: DeathCause::Drought,
            })
        ),
        detail: format!("events {:?}", events),
    });

    results
}

// ── 4. Plague ────────────────────────────────────────────────────────────

fn validate_plague(_verbose: bool) -> Vec<TestResult> {
    println!("--- Plague ---");
    let mut results = Vec::new();

    let score_ok = stress_score(4, 4) == 0 && stress_score(5, 4) == 1 && stress_score(10, 0) == 6;
    results.push(TestResult {
        name: "stress_score_grace_window".into(),
        passed: score_ok,
        detail: format!(
            "(4,4) -> {}, (5,4) -> {}, (10,0) -> {}",
            stress_score(4, 4),
            stress_score(5, 4),
            stress_score(10, 0)
        ),
    });

    let onset_ok = (onset_chance(0) - 0.001).abs() < 1e-9
        && (onset_chance(6) - 0.004).abs() < 1e-9
        && (onset_chance(200) - 0.05).abs() < 1e-9;
    let kill_ok = (kill_chance(0) - 0.01).abs() < 1e-9
        && (kill_chance(10) - 0.03).abs() < 1e-9
        && (kill_chance(500) - 0.25).abs() < 1e-9;
    results.push(TestResult {
        name: "onset_and_kill_curves_capped".into(),
        passed: onset_ok && kill_ok,
        detail: format!(
            "onset 0/6/200 -> {}/{}/{}, kill 0/10/500 -> {}/{}/{}",
            onset_chance(0),
            onset_chance(6),
            onset_chance(200),
            kill_chance(0),
            kill_chance(10),
            kill_chance(500)
        ),
    });

    // Forced RNG: onset on the first tick, kill on the second. Growth
    // advances on the onset tick (the roll comes after growth) and holds
    // on the plagued tick.
    let rates = TickRates::of(&GameState::new());
    let mut slot = PlantSlot::seedling();
    slot.stage = Stage::Growing;
    slot.water = 50.0;
    slot.growth = 40.0;
    let mut events = Vec::new();
    step_slot(1, &mut slot, rates, &mut always(), &mut events);
    let after_onset = (slot.plague, slot.growth);
    step_slot(1, &mut slot, rates, &mut always(), &mut events);
    results.push(TestResult {
        name: "forced_onset_then_kill".into(),
        passed: after_onset == (true, 42.0)
            && slot.stage == Stage::Dead
            && (slot.growth - 0.0).abs() < 1e-9
            && events
                == vec![
                    FieldEvent::PlagueStruck { index: 1 },
                    FieldEvent::PlantDied {
                        index: 1,
                        cause: DeathCause::Plague,
                    },
                ],
        detail: format!("after onset {:?}, events {:?}", after_onset, events),
    });

    let mut broke = GameState::new();
    broke.field[0].plague = true;
    broke.money = 1.0;
    let mut engine = FarmEngine::from_state_seeded(broke, 3);
    let declined = engine.treat_plague(0);
    results.push(TestResult {
        name: "treatment_needs_the_fee".into(),
        passed: declined == Err(CommandError::InsufficientFunds) && engine.state().field[0].plague,
        detail: format!("at money 1.0: {declined:?}"),
    });

    let mut sick = GameState::new();
    sick.field[0].plague = true;
    let mut engine = FarmEngine::from_state_seeded(sick, 3);
    let cured = engine.treat_plague(0);
    results.push(TestResult {
        name: "treatment_cures_for_two".into(),
        passed: cured == Ok(())
            && !engine.state().field[0].plague
            && (engine.state().money - 3.0).abs() < 1e-9,
        detail: format!("money after cure: {}", engine.state().money),
    });

    let mut engine = FarmEngine::from_seed(3);
    let healthy = engine.treat_plague(0);
    results.push(TestResult {
        name: "treating_healthy_plant_declined".into(),
        passed: healthy == Err(CommandError::NotInfected),
        detail: format!("{healthy:?}"),
    });

    results
}

// ── 5. Commands and pause ────────────────────────────────────────────────

fn validate_commands(_verbose: bool) -> Vec<TestResult> {
    println!("--- Commands ---");
    let mut results = Vec::new();

    let mut engine = FarmEngine::from_seed(1);
    engine.set_paused(true);
    let frozen = engine.state().clone();
    let all_declined = engine.tick() == Err(CommandError::Paused)
        && engine.water(0) == Err(CommandError::Paused)
        && engine.sell(1) == Err(CommandError::Paused)
        && engine.buy_upgrade(UpgradeKind::Quality) == Err(CommandError::Paused)
        && engine.reset() == Err(CommandError::Paused);
    let unchanged = engine.state() == &frozen;
    let resumed = !engine.set_paused(false) && engine.tick().is_ok() && engine.state().tick == 1;
    results.push(TestResult {
        name: "pause_freezes_everything".into(),
        passed: all_declined && unchanged && resumed,
        detail: format!(
            "declined {all_declined}, unchanged {unchanged}, resumed to tick {}",
            engine.state().tick
        ),
    });

    let mut engine = FarmEngine::from_seed(2);
    let receipt = engine.water(0);
    let fee_ok = matches!(receipt, Ok(WaterReceipt { added, cost })
        if (added - 20.0).abs() < 1e-9 && (cost - 0.2).abs() < 1e-9)
        && (engine.state().field[0].water - 70.0).abs() < 1e-9
        && (engine.state().money - 4.8).abs() < 1e-9;
    results.push(TestResult {
        name: "watering_charges_per_unit".into(),
        passed: fee_ok,
        detail: format!(
            "{receipt:?}, water {}, money {}",
            engine.state().field[0].water,
            engine.state().money
        ),
    });

    let shape_ok = engine.water(99) == Err(CommandError::NoSuchSlot)
        && engine.water(3) == Err(CommandError::EmptySlot);
    results.push(TestResult {
        name: "slot_shape_errors".into(),
        passed: shape_ok,
        detail: "index 99 -> NoSuchSlot, empty slot -> EmptySlot".into(),
    });

    let mut engine = FarmEngine::from_seed(2);
    engine.purge(0).ok();
    let purge_ok =
        (engine.state().field[0].water - 30.0).abs() < 1e-9 && (engine.state().money - 5.0).abs() < 1e-9;
    results.push(TestResult {
        name: "purge_drains_for_free".into(),
        passed: purge_ok,
        detail: format!(
            "water {}, money {}",
            engine.state().field[0].water,
            engine.state().money
        ),
    });

    let mut rich = GameState::new();
    rich.money = 1000.0;
    let mut engine = FarmEngine::from_state_seeded(rich, 8);
    let q1 = engine.buy_upgrade(UpgradeKind::Quality);
    let q2 = engine.buy_upgrade(UpgradeKind::Quality);
    let q3 = engine.buy_upgrade(UpgradeKind::Quality);
    let ladder_ok = q1 == Ok(30.0)
        && q2 == Ok(66.0)
        && q3 == Ok(146.0)
        && engine.state().quality_level == 3
        && (engine.state().money - 758.0).abs() < 1e-9
        && (engine.state().price_per_fruit() - 1.75).abs() < 1e-9;
    results.push(TestResult {
        name: "upgrade_ladder_charges_and_levels".into(),
        passed: ladder_ok,
        detail: format!(
            "paid {q1:?}/{q2:?}/{q3:?}, money {}, fruit price {}",
            engine.state().money,
            engine.state().price_per_fruit()
        ),
    });

    let plot = engine.buy_upgrade(UpgradeKind::Plot);
    let appended = engine.state().field.last().cloned().unwrap_or_else(PlantSlot::empty);
    let plot_ok = plot == Ok(50.0)
        && engine.state().field.len() == 17
        && engine.state().plot_count == 1
        && appended.stage == Stage::Seedling
        && (appended.water - 50.0).abs() < 1e-9
        && next_upgrade_price(UpgradeKind::Plot, engine.state().plot_count) == 111.0;
    results.push(TestResult {
        name: "plot_purchase_appends_seedling".into(),
        passed: plot_ok,
        detail: format!(
            "paid {plot:?}, field {} slots, next plot at {}",
            engine.state().field.len(),
            next_upgrade_price(UpgradeKind::Plot, engine.state().plot_count)
        ),
    });

    let s = engine.buy_automation(AutomationKind::Sprinkler);
    let p = engine.buy_automation(AutomationKind::Picker);
    let v = engine.buy_automation(AutomationKind::Vendor);
    let again = engine.buy_automation(AutomationKind::Sprinkler);
    let autos_ok = s == Ok(80.0)
        && p == Ok(120.0)
        && v == Ok(150.0)
        && again == Err(CommandError::AlreadyOwned)
        && (engine.state().money - 358.0).abs() < 1e-9;
    results.push(TestResult {
        name: "automations_bought_once".into(),
        passed: autos_ok,
        detail: format!("paid {s:?}/{p:?}/{v:?}, rebuy {again:?}, money {}", engine.state().money),
    });

    let mut stocked = GameState::new();
    stocked.stock = 5;
    let mut engine = FarmEngine::from_state_seeded(stocked, 8);
    let removed = engine.remove_slot(0);
    let emptied = engine.state().field[0] == PlantSlot::empty();
    let replanted = engine.plant_from_stock(0);
    let occupied = engine.plant_from_stock(0);
    let replant_ok = removed == Ok(())
        && emptied
        && replanted == Ok(())
        && engine.state().stock == 4
        && engine.state().field[0].stage == Stage::Seedling
        && occupied == Err(CommandError::SlotOccupied);
    results.push(TestResult {
        name: "remove_then_replant_from_stock".into(),
        passed: replant_ok,
        detail: format!(
            "stock {}, slot {:?}, rebuild on occupied: {occupied:?}",
            engine.state().stock,
            engine.state().field[0].stage
        ),
    });

    let mut played = GameState::new();
    played.money = 777.0;
    played.stock = 9;
    played.tick = 123;
    let mut engine = FarmEngine::from_state_seeded(played, 8);
    let reset = engine.reset();
    results.push(TestResult {
        name: "reset_restores_fresh_game".into(),
        passed: reset == Ok(()) && engine.state() == &GameState::new(),
        detail: format!("tick {}, money {}", engine.state().tick, engine.state().money),
    });

    results
}

// ── 6. Stock reserve ─────────────────────────────────────────────────────

fn validate_reserve(_verbose: bool) -> Vec<TestResult> {
    println!("--- Stock reserve ---");
    let mut results = Vec::new();

    let mut stocked = GameState::new();
    stocked.stock = 10;
    let mut engine = FarmEngine::from_state_seeded(stocked.clone(), 4);
    let sale = engine.sell(100);
    let clamp_ok = matches!(sale, Ok(SaleReceipt { sold: 9, reserve: 1, .. }))
        && engine.state().stock == 1
        && (engine.state().money - 14.0).abs() < 1e-9;
    results.push(TestResult {
        name: "oversell_clamps_to_reserve".into(),
        passed: clamp_ok,
        detail: format!("{sale:?}, stock {}, money {}", engine.state().stock, engine.state().money),
    });

    let mut engine = FarmEngine::from_state_seeded(stocked.clone(), 4);
    let sale = engine.sell(3);
    let partial_ok =
        matches!(sale, Ok(SaleReceipt { sold: 3, .. })) && engine.state().stock == 7;
    results.push(TestResult {
        name: "partial_sale_under_headroom".into(),
        passed: partial_ok,
        detail: format!("{sale:?}, stock {}", engine.state().stock),
    });

    let mut last = GameState::new();
    last.stock = 1;
    let mut engine = FarmEngine::from_state_seeded(last, 4);
    let declined = engine.sell(1);
    let protected_ok = declined == Err(CommandError::ReserveProtected)
        && engine.state().stock == 1
        && (engine.state().money - 5.0).abs() < 1e-9;
    results.push(TestResult {
        name: "last_fruit_is_reserve".into(),
        passed: protected_ok,
        detail: format!("{declined:?}, stock {}", engine.state().stock),
    });

    let mut twenty = GameState::new();
    twenty.stock = 20;
    let mut engine = FarmEngine::from_state_seeded(twenty, 4);
    let sale = engine.sell_all();
    let sell_all_ok = matches!(sale, Ok(SaleReceipt { sold: 18, reserve: 2, .. }))
        && engine.state().stock == 2
        && (engine.state().money - 23.0).abs() < 1e-9;
    results.push(TestResult {
        name: "sell_all_keeps_reserve".into(),
        passed: sell_all_ok,
        detail: format!("{sale:?}, stock {}, money {}", engine.state().stock, engine.state().money),
    });

    let mut seeded = GameState::new();
    seeded.stock = 1;
    let mut engine = FarmEngine::from_state_seeded(seeded, 4);
    let blocked = engine.plant_from_stock(1);
    let mut two = GameState::new();
    two.stock = 2;
    let mut engine2 = FarmEngine::from_state_seeded(two, 4);
    let planted = engine2.plant_from_stock(1);
    results.push(TestResult {
        name: "planting_cannot_spend_reserve".into(),
        passed: blocked == Err(CommandError::ReserveProtected)
            && planted == Ok(())
            && engine2.state().stock == 1,
        detail: format!("stock 1 -> {blocked:?}, stock 2 -> {planted:?}"),
    });

    let mut upgraded = GameState::new();
    upgraded.stock = 10;
    upgraded.quality_level = 2;
    let mut engine = FarmEngine::from_state_seeded(upgraded, 4);
    let sale = engine.sell(1);
    let priced_ok = matches!(sale, Ok(SaleReceipt { sold: 1, .. }))
        && (engine.state().money - 6.5).abs() < 1e-9;
    results.push(TestResult {
        name: "sales_use_quality_price".into(),
        passed: priced_ok,
        detail: format!("{sale:?}, money {}", engine.state().money),
    });

    results
}

// ── 7. Automations in the tick ───────────────────────────────────────────

fn validate_automation(_verbose: bool) -> Vec<TestResult> {
    println!("--- Automations ---");
    let mut results = Vec::new();

    let mut dryish = GameState::new();
    dryish.field[0].water = 30.0;
    dryish.autos.set_owned(AutomationKind::Sprinkler);
    let mut engine = FarmEngine::from_state_seeded(dryish, 11);
    engine.tick().ok();
    let watered = engine.state().field[0].water;
    let money = engine.state().money;
    results.push(TestResult {
        name: "sprinkler_tops_up_and_charges".into(),
        passed: (watered - 35.2).abs() < 1e-9 && (money - 4.94).abs() < 1e-9,
        detail: format!("water {watered} (29.2 + 6), money {money}"),
    });

    let mut wet = GameState::new();
    wet.field[0].water = 70.0;
    wet.autos.set_owned(AutomationKind::Sprinkler);
    let mut engine = FarmEngine::from_state_seeded(wet, 11);
    engine.tick().ok();
    let skipped_ok = (engine.state().field[0].water - 69.2).abs() < 1e-9
        && (engine.state().money - 5.0).abs() < 1e-9;
    results.push(TestResult {
        name: "sprinkler_skips_wet_plants".into(),
        passed: skipped_ok,
        detail: format!(
            "water {}, money {}",
            engine.state().field[0].water,
            engine.state().money
        ),
    });

    let mut ready = GameState::new();
    ready.field[0] = PlantSlot {
        alive: true,
        stage: Stage::Ripe,
        water: 50.0,
        growth: 100.0,
        fruits: 3,
        ..PlantSlot::empty()
    };
    ready.autos.set_owned(AutomationKind::Picker);
    ready.autos.set_owned(AutomationKind::Vendor);
    let mut engine = FarmEngine::from_state_seeded(ready, 11);
    let report = engine.tick().unwrap_or_default();
    let sale = report.events.iter().find_map(|e| match e {
        FieldEvent::VendorSale { sold, proceeds } => Some((*sold, *proceeds)),
        _ => None,
    });
    let chain_ok = engine.state().stock == 1
        && (engine.state().money - 7.0).abs() < 1e-9
        && engine.state().field[0].stage == Stage::Growing
        && engine.state().field[0].fruits == 0
        && sale == Some((2, 2.0));
    results.push(TestResult {
        name: "picker_feeds_vendor_same_tick".into(),
        passed: chain_ok,
        detail: format!(
            "stock {}, money {}, vendor sale {sale:?}",
            engine.state().stock,
            engine.state().money
        ),
    });

    let mut warehouse = GameState::new();
    warehouse.stock = 100;
    warehouse.autos.set_owned(AutomationKind::Vendor);
    let mut engine = FarmEngine::from_state_seeded(warehouse, 11);
    let report = engine.tick().unwrap_or_default();
    let sale = report.events.iter().find_map(|e| match e {
        FieldEvent::VendorSale { sold, proceeds } => Some((*sold, *proceeds)),
        _ => None,
    });
    let drained_ok = engine.state().stock == 10
        && (engine.state().money - 95.0).abs() < 1e-9
        && sale == Some((90, 90.0));
    results.push(TestResult {
        name: "vendor_leaves_presale_reserve".into(),
        passed: drained_ok,
        detail: format!("stock {}, sale {sale:?}", engine.state().stock),
    });

    let mut sparse = GameState::new();
    sparse.stock = 1;
    sparse.autos.set_owned(AutomationKind::Vendor);
    let mut engine = FarmEngine::from_state_seeded(sparse, 11);
    let report = engine.tick().unwrap_or_default();
    let quiet = !report
        .events
        .iter()
        .any(|e| matches!(e, FieldEvent::VendorSale { .. }));
    results.push(TestResult {
        name: "vendor_silent_when_nothing_sellable".into(),
        passed: quiet && engine.state().stock == 1 && (engine.state().money - 5.0).abs() < 1e-9,
        detail: format!("stock {}, events {:?}", engine.state().stock, report.events),
    });

    results
}

// ── 8. Persistence ───────────────────────────────────────────────────────

fn validate_persistence(_verbose: bool) -> Vec<TestResult> {
    println!("--- Persistence ---");
    let mut results = Vec::new();

    let mut state = GameState::new();
    state.money = 123.456789;
    state.stock = 42;
    state.tick = 999;
    state.paused = true;
    state.quality_level = 3;
    state.growth_level = 2;
    state.yield_level = 1;
    state.plot_count = 2;
    state.autos = AutoFlags {
        sprinkler: true,
        picker: true,
        vendor: true,
    };
    state.field[1] = PlantSlot::seedling();
    state.field[1].water = 33.3;
    state.field[1].growth = 12.5;
    state.field[2] = PlantSlot::seedling();
    state.field[2].kill();
    state.field[3] = PlantSlot::seedling();
    state.field[3].plague = true;
    state.field[3].drought_ticks = 2;

    let blob = to_json(&state).unwrap_or_default();
    let reloaded = from_json(&blob);
    results.push(TestResult {
        name: "save_load_round_trip_lossless".into(),
        passed: matches!(&reloaded, Ok(s) if s == &state),
        detail: format!("{} byte blob", blob.len()),
    });

    let wire_ok = blob.contains("\"priceBase\"")
        && blob.contains("\"qualityLevel\"")
        && blob.contains("\"plotCount\"")
        && blob.contains("\"droughtTicks\"")
        && blob.contains("\"dead\"")
        && !blob.contains("price_base")
        && !blob.contains("drought_ticks");
    results.push(TestResult {
        name: "wire_names_are_camel_case".into(),
        passed: wire_ok,
        detail: "priceBase/qualityLevel/plotCount/droughtTicks, lowercase stages".into(),
    });

    let partial = from_json(r#"{"money": 77.5, "stock": 3}"#);
    let partial_ok = match &partial {
        Ok(s) => {
            (s.money - 77.5).abs() < 1e-9
                && s.stock == 3
                && s.tick == 0
                && !s.paused
                && s.field.len() == 16
                && s.field[0].stage == Stage::Seedling
        }
        Err(_) => false,
    };
    results.push(TestResult {
        name: "missing_fields_take_defaults".into(),
        passed: partial_ok,
        detail: format!("{partial:?}").chars().take(80).collect(),
    });

    let mixed = from_json(
        r#"{"field": [null,
                      {"stage": "zombie", "water": 55},
                      {"alive": true, "stage": "growing", "water": 40.0, "growth": 50.0}]}"#,
    );
    let mixed_ok = match &mixed {
        Ok(s) => {
            s.field.len() == 3
                && s.field[0] == PlantSlot::empty()
                && s.field[1] == PlantSlot::empty()
                && s.field[2].stage == Stage::Growing
                && (s.field[2].water - 40.0).abs() < 1e-9
        }
        Err(_) => false,
    };
    results.push(TestResult {
        name: "corrupt_slots_degrade_to_empty".into(),
        passed: mixed_ok,
        detail: "null and unknown-stage slots emptied, valid slot kept".into(),
    });

    let aged = from_json(
        r#"{"field": [{"alive": true, "stage": "growing", "water": 40, "growth": 50, "droughtTicks": 3}]}"#,
    );
    let aged_ok = match &aged {
        Ok(s) => !s.field[0].plague && s.field[0].drought_ticks == 3,
        Err(_) => false,
    };
    results.push(TestResult {
        name: "omitted_slot_fields_default".into(),
        passed: aged_ok,
        detail: "plague absent -> false, droughtTicks kept".into(),
    });

    let fresh = GameState::new();
    let fallback_ok = load_or_default("}{ not json") == fresh
        && load_or_default("[1, 2, 3]") == fresh
        && load_or_default("") == fresh
        && matches!(from_json("{}"), Ok(s) if s == fresh);
    results.push(TestResult {
        name: "unreadable_blobs_start_fresh".into(),
        passed: fallback_ok,
        detail: "garbage, array, and empty blobs all fall back".into(),
    });

    let junk = from_json(r#"{"money": 9.0, "legacyJunk": {"a": 1}}"#);
    results.push(TestResult {
        name: "unknown_keys_ignored".into(),
        passed: matches!(&junk, Ok(s) if (s.money - 9.0).abs() < 1e-9),
        detail: format!("{:?}", junk.map(|s| s.money)),
    });

    results
}

// ── 9. Long seeded run ───────────────────────────────────────────────────

/// 2000 ticks of a fully automated farm under a fixed seed, with every
/// structural invariant checked after every tick.
fn validate_soak(verbose: bool) -> Vec<TestResult> {
    println!("--- Long seeded run ---");
    let mut results = Vec::new();

    let mut start = GameState::new();
    start.money = 10_000.0;
    start.stock = 30;
    let mut engine = FarmEngine::from_state_seeded(start, 20_240_817);

    let mut bought = true;
    for kind in AutomationKind::ALL {
        bought &= engine.buy_automation(kind).is_ok();
    }
    results.push(TestResult {
        name: "soak_setup_buys_automations".into(),
        passed: bought && (engine.state().money - 9650.0).abs() < 1e-9,
        detail: format!("money after purchases: {}", engine.state().money),
    });

    let mut violations: Vec<String> = Vec::new();
    let mut prev_living: Vec<bool> = engine.state().field.iter().map(|s| s.is_living()).collect();

    for t in 1..=2000u64 {
        if t % 97 == 0 {
            if let Some(i) = engine.state().field.iter().position(|s| !s.alive) {
                let _ = engine.plant_from_stock(i);
            }
        }
        if t % 251 == 0 {
            let _ = engine.buy_upgrade(UpgradeKind::Growth);
        }

        let report = match engine.tick() {
            Ok(report) => report,
            Err(e) => {
                violations.push(format!("tick {t} refused: {e}"));
                break;
            }
        };
        if report.tick != t {
            violations.push(format!("tick counter {} at loop {t}", report.tick));
        }
        if report.refresh != (t % 10 == 0) {
            violations.push(format!("refresh flag wrong at tick {t}"));
        }

        let state = engine.state();
        if !state.money.is_finite() {
            violations.push(format!("money not finite at tick {t}"));
        }
        if state.field.len() != 16 {
            violations.push(format!("field resized to {} at tick {t}", state.field.len()));
        }
        for (i, slot) in state.field.iter().enumerate() {
            if !(0.0..=WATER_MAX).contains(&slot.water) {
                violations.push(format!("slot {i} water {} at tick {t}", slot.water));
            }
            if !(0.0..=GROWTH_MAX).contains(&slot.growth) {
                violations.push(format!("slot {i} growth {} at tick {t}", slot.growth));
            }
            match slot.stage {
                Stage::Empty => {
                    if slot.alive {
                        violations.push(format!("slot {i} alive while empty at tick {t}"));
                    }
                }
                Stage::Dead => {
                    if !slot.alive || slot.fruits != 0 || slot.plague {
                        violations.push(format!("slot {i} broken dead-state at tick {t}"));
                    }
                }
                _ => {
                    if !slot.alive {
                        violations.push(format!("slot {i} {:?} but not alive at tick {t}", slot.stage));
                    }
                }
            }
            if slot.fruits > 0 && slot.stage != Stage::Ripe {
                violations.push(format!("slot {i} carries fruit while {:?} at tick {t}", slot.stage));
            }

            // Every transition out of living must have been reported.
            if prev_living[i] && !slot.is_living() && slot.stage == Stage::Dead {
                let reported = report
                    .events
                    .iter()
                    .any(|e| matches!(e, FieldEvent::PlantDied { index, .. } if *index == i));
                if !reported {
                    violations.push(format!("unreported death in slot {i} at tick {t}"));
                }
            }
        }
        prev_living = state.field.iter().map(|s| s.is_living()).collect();

        if violations.len() > 20 {
            break;
        }
    }

    let finished = engine.state().tick == 2000;
    results.push(TestResult {
        name: "soak_invariants_hold_2000_ticks".into(),
        passed: violations.is_empty() && finished,
        detail: if violations.is_empty() {
            format!(
                "clean run: money {:.2}, stock {}, growth level {}",
                engine.state().money,
                engine.state().stock,
                engine.state().growth_level
            )
        } else {
            format!("{} violations, first: {}", violations.len(), violations[0])
        },
    });

    let snapshot_blob = serde_json::to_string(&engine.snapshot()).unwrap_or_default();
    results.push(TestResult {
        name: "soak_snapshot_serializes".into(),
        passed: snapshot_blob.contains("\"economy\"") && snapshot_blob.contains("\"pricePerFruit\""),
        detail: format!("{} byte snapshot", snapshot_blob.len()),
    });

    if verbose {
        println!(
            "  final state: tick {}, money {:.2}, stock {}, {} living slots",
            engine.state().tick,
            engine.state().money,
            engine.state().stock,
            engine.state().field.iter().filter(|s| s.is_living()).count()
        );
    }

    results
}
