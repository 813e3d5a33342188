#[cfg(test)]
mod population_test {
    use biofilm_numerical::Vec2;
    use biofilm_particles::{NewCell, NewEps, Population, PopulationEvent, EPS_ID_BASE};

    fn daughter(x: f64) -> NewCell {
        NewCell { position: Vec2::new(x, 0.0), orientation: Vec2::new(1.0, 0.0), diameter: 1.0, length: 2.5 }
    }

    #[test]
    fn id_spaces_are_disjoint_test() {
        let mut pop = Population::new();
        let c0 = pop.add_cell(Vec2::from_float(0.0), Vec2::new(1.0, 0.0), 1.0, 1.0);
        let c1 = pop.add_cell(Vec2::from_float(1.0), Vec2::new(1.0, 0.0), 1.0, 1.0);
        let e0 = pop.add_eps(Vec2::from_float(2.0), Vec2::new(1.0, 0.0), 0.25);

        assert_eq!(c0, 0);
        assert_eq!(c1, 1);
        assert_eq!(e0, EPS_ID_BASE);
        assert_eq!(pop.count_cells(), 2);
        assert_eq!(pop.count_eps(), 1);
    }

    #[test]
    fn division_replaces_mother_test() {
        let mut pop = Population::new();
        pop.add_cell(Vec2::from_float(0.0), Vec2::new(1.0, 0.0), 1.0, 5.0);
        pop.add_cell(Vec2::from_float(8.0), Vec2::new(1.0, 0.0), 1.0, 1.5);

        let events = vec![PopulationEvent::Division {
            mother: 0,
            first: daughter(-1.25),
            second: daughter(1.25),
        }];
        pop.apply_events(&events);

        assert_eq!(pop.len(), 3);
        assert_eq!(pop.count_cells(), 3);
        // the survivor keeps its id, daughters get fresh monotonic ids
        assert_eq!(pop.particle(0).id(), 1);
        assert_eq!(pop.particle(1).id(), 2);
        assert_eq!(pop.particle(2).id(), 3);
    }

    #[test]
    fn secretion_appends_eps_test() {
        let mut pop = Population::new();
        pop.add_cell(Vec2::from_float(0.0), Vec2::new(1.0, 0.0), 1.0, 3.0);

        let events = vec![PopulationEvent::Secretion(NewEps {
            position: Vec2::new(0.5, 0.0),
            orientation: Vec2::new(0.0, 1.0),
            radius: 0.25,
        })];
        pop.apply_events(&events);

        assert_eq!(pop.len(), 2);
        assert_eq!(pop.particle(1).id(), EPS_ID_BASE);
        assert!(!pop.particle(1).is_cell());
    }

    #[test]
    fn merge_of_multiple_events_is_ordered_test() {
        let mut pop = Population::new();
        for i in 0..4 {
            pop.add_cell(Vec2::from_float(i as f64), Vec2::new(1.0, 0.0), 1.0, 5.0);
        }

        let events = vec![
            PopulationEvent::Division { mother: 1, first: daughter(0.0), second: daughter(1.0) },
            PopulationEvent::Division { mother: 3, first: daughter(2.0), second: daughter(3.0) },
        ];
        pop.apply_events(&events);

        // two mothers out, four daughters in
        assert_eq!(pop.len(), 6);
        let ids: Vec<u32> = pop.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![0, 2, 4, 5, 6, 7]);
    }
}
