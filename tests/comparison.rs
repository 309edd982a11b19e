use lot_sizing::{
    compare_approaches, compare_ledgers, fixed_order_quantity_plan, lot_for_lot_plan,
    one_time_run_plan, periodic_order_quantity_plan, CostParameters, InventoryTurns, Ledger,
    LedgerRow, PlanningError,
};

const FLAT: [f64; 4] = [10.0, 10.0, 10.0, 10.0];

fn flat_ledgers() -> Vec<Ledger> {
    let costs = CostParameters::new(50.0, 1.0);
    vec![
        one_time_run_plan(40.0, &costs, &FLAT).unwrap(),
        lot_for_lot_plan(&costs, &FLAT).unwrap(),
        fixed_order_quantity_plan(15.0, &costs, &FLAT).unwrap(),
        periodic_order_quantity_plan(2, &costs, &FLAT).unwrap(),
    ]
}

#[test]
fn summarizes_each_approach_in_order() {
    let names = ["OTR", "L4L", "FOQ", "POQ"];
    let table = compare_approaches(40.0, &flat_ledgers(), &names).unwrap();

    let approaches: Vec<&str> = table.rows().iter().map(|r| r.approach.as_str()).collect();
    assert_eq!(approaches, names);

    let otr = table.get("OTR").unwrap();
    assert_eq!(otr.inventory_cost, 60.0);
    assert_eq!(otr.setup_cost, 50.0);
    assert_eq!(otr.total_cost, 110.0);
    assert_eq!(otr.avg_ioh, 15.0);
    assert_eq!(otr.inventory_turns, InventoryTurns::Finite(2.7));

    let foq = table.get("FOQ").unwrap();
    assert_eq!(foq.total_cost, 170.0);
    assert_eq!(foq.avg_ioh, 5.0);
    assert_eq!(foq.inventory_turns, InventoryTurns::Finite(8.0));

    let poq = table.get("POQ").unwrap();
    assert_eq!(poq.total_cost, 120.0);
    assert_eq!(poq.inventory_turns, InventoryTurns::Finite(8.0));
}

#[test]
fn lot_for_lot_turns_are_undefined() {
    let table = compare_ledgers(&FLAT, &flat_ledgers()).unwrap();
    let l4l = table.get("Lot for Lot").unwrap();

    assert_eq!(l4l.avg_ioh, 0.0);
    assert!(l4l.inventory_turns.is_undefined());
    assert_eq!(l4l.inventory_cost, 0.0);
    assert_eq!(l4l.total_cost, 200.0);
}

#[test]
fn average_rounding_to_zero_is_undefined() {
    // One unit carried in the first of 25 periods averages 0.04, which
    // rounds to 0.0.
    let rows = (1..=25)
        .map(|period| {
            let ioh = if period == 1 { 1.0 } else { 0.0 };
            LedgerRow {
                period,
                forecast: 10.0,
                production: 10.0 + ioh,
                ioh,
                holding_cost: ioh,
                setup_cost: 0.0,
                total_cost: ioh,
            }
        })
        .collect();
    let ledger = Ledger::new("tiny", rows);
    assert!(ledger.average_ioh() > 0.0);

    let table = compare_approaches(250.0, &[ledger], &["tiny"]).unwrap();
    assert_eq!(table.rows()[0].avg_ioh, 0.0);
    assert_eq!(table.rows()[0].inventory_turns, InventoryTurns::Undefined);
}

#[test]
fn average_ioh_ties_round_to_even() {
    let costs = CostParameters::new(50.0, 1.0);

    // IOH sums to 29 over 4 periods: an exact 7.25.
    let tie = one_time_run_plan(32.25, &costs, &FLAT).unwrap();
    assert_eq!(tie.average_ioh(), 7.25);

    // Averages to 7.85 in decimal, just below it in binary.
    let demand = [10.0, 5.0, 5.0, 5.0];
    let below = one_time_run_plan(25.35, &costs, &demand).unwrap();

    let tie_row = compare_approaches(40.0, &[tie], &["tie"]).unwrap().rows()[0].clone();
    assert_eq!(tie_row.avg_ioh, 7.2);
    assert_eq!(tie_row.inventory_turns, InventoryTurns::Finite(5.6));

    let below_row = compare_ledgers(&demand, &[below]).unwrap().rows()[0].clone();
    assert_eq!(below_row.avg_ioh, 7.8);
    assert_eq!(below_row.inventory_turns, InventoryTurns::Finite(3.2));
}

#[test]
fn cheapest_picks_lowest_total_cost() {
    let table = compare_ledgers(&FLAT, &flat_ledgers()).unwrap();
    assert_eq!(table.cheapest().unwrap().approach, "One Time Run");
}

#[test]
fn rejects_mismatched_inputs() {
    let result = compare_approaches(40.0, &flat_ledgers(), &["only one"]);
    assert!(matches!(
        result,
        Err(PlanningError::ApproachMismatch {
            ledgers: 4,
            approaches: 1
        })
    ));
}
