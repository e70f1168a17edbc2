use lifelike::config::Config;
use lifelike::driver;
use lifelike::driver::Sleep;
use lifelike::events::StopReason;
use lifelike::grid::Grid;
use lifelike::menu::Menu;
use lifelike::pattern::InitialState;
use lifelike::pattern::GLIDER;
use lifelike::render;
use lifelike::rule_set::RuleSet;
use lifelike::simulator::Simulator;

#[test]
fn glider_session() -> anyhow::Result<()> {
    let mut menu = Menu::new("1\n2\n".as_bytes(), Vec::new());
    let rules = menu.choose_rules()?;
    let state = menu.choose_initial_state()?;

    let config = Config::default()
        .with_frame_delay(std::time::Duration::ZERO)
        .with_max_generations(4)
        .with_seed(0);
    let mut rng = config.rng();
    let mut sim = Simulator::with_initial_state(rules, state, &config, &mut rng);

    let mut out = Vec::new();
    let summary = driver::run(&mut sim, &mut out, &mut Sleep, &config)?;

    assert_eq!(summary.generations, 4);
    assert_eq!(summary.reason, StopReason::MaxGenerations);

    let mut expected = Grid::new(config.rows, config.cols);
    expected.load_pattern(GLIDER.offset(1, 1));
    assert_eq!(sim.grid(), &expected);

    let out = String::from_utf8(out)?;
    let last = render::render(&expected, 4).replace('\n', "\r\n");
    assert!(out.ends_with(&last));

    Ok(())
}

#[test]
fn seeded_runs_repeat() {
    let config = Config::default().with_seed(99);

    let run = || {
        let mut rng = config.rng();
        let mut sim = Simulator::with_initial_state(
            RuleSet::from_spec("3", "23"),
            InitialState::Random,
            &config,
            &mut rng,
        );
        sim.advance(10);
        sim.grid().clone()
    };

    assert_eq!(run(), run());
}

#[test]
fn seeds_rule_never_survives() {
    let mut grid = Grid::new(12, 12);
    grid.load_pattern(GLIDER.cells());

    let mut sim = Simulator::new(RuleSet::from_spec("2", ""), grid.clone());
    sim.step();

    for (r, c) in grid.alive_cells() {
        assert!(!sim.grid().get(r, c), "({r}, {c}) survived");
    }
}
