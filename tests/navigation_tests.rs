use round_results::components::round_link::LinkVariant;
use round_results::components::sidebar::{drawer_content, DrawerContent};
use round_results::data::parse_rounds;
use round_results::grouping::{group_rounds_by_year, toggle_year};
use round_results::model::Round;

fn sample_rounds() -> Vec<Round> {
    parse_rounds(
        r#"[
            {"id": 1, "year": 2020, "displayName": "Spring", "areResultsOfficial": true},
            {"id": 2, "year": 2019, "displayName": "Fall", "areResultsOfficial": false},
            {"id": 3, "year": 2020, "displayName": "Winter", "areResultsOfficial": true}
        ]"#,
    )
    .expect("Failed to parse sample rounds")
}

fn round(id: usize, year: i32) -> Round {
    Round {
        id: id.to_string(),
        year,
        display_name: format!("Round {}", id),
        are_results_official: id % 3 != 0,
    }
}

#[test]
fn test_sample_groups_and_decoration() {
    let groups = group_rounds_by_year(&sample_rounds());

    let layout: Vec<(i32, Vec<String>)> = groups
        .iter()
        .map(|g| (g.year, g.rounds.iter().map(|r| r.display_name.clone()).collect()))
        .collect();
    assert_eq!(
        layout,
        vec![
            (2019, vec!["Fall".to_string()]),
            (2020, vec!["Spring".to_string(), "Winter".to_string()]),
        ]
    );

    let decorated: Vec<&str> = groups
        .iter()
        .flat_map(|g| g.rounds.iter())
        .filter(|r| LinkVariant::for_round(r).has_badge())
        .map(|r| r.display_name.as_str())
        .collect();
    assert_eq!(decorated, vec!["Fall"], "Only the unofficial round should carry a badge");
}

#[test]
fn test_every_round_lands_in_exactly_one_group() {
    let years = [2017, 2021, 2019, 2017, 2020, 2021, 2019, 2019, 2018, 2021];
    let rounds: Vec<Round> = years.iter().enumerate().map(|(i, y)| round(i, *y)).collect();
    let groups = group_rounds_by_year(&rounds);

    let mut distinct: Vec<i32> = years.to_vec();
    distinct.sort();
    distinct.dedup();
    let group_years: Vec<i32> = groups.iter().map(|g| g.year).collect();
    assert_eq!(group_years, distinct, "Groups should be the distinct years, ascending");

    assert!(groups.iter().all(|g| !g.rounds.is_empty()), "No group may be empty");

    let mut seen: Vec<String> = groups
        .iter()
        .flat_map(|g| g.rounds.iter().map(|r| r.id.clone()))
        .collect();
    assert_eq!(seen.len(), rounds.len(), "Rounds were dropped or duplicated");
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), rounds.len(), "A round appears in more than one group");
}

#[test]
fn test_rounds_keep_input_order_within_year() {
    let rounds: Vec<Round> = [2019, 2020, 2019, 2020, 2019]
        .iter()
        .enumerate()
        .map(|(i, y)| round(i, *y))
        .collect();
    let groups = group_rounds_by_year(&rounds);

    let ids_2019: Vec<&str> = groups[0].rounds.iter().map(|r| r.id.as_str()).collect();
    let ids_2020: Vec<&str> = groups[1].rounds.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids_2019, vec!["0", "2", "4"]);
    assert_eq!(ids_2020, vec!["1", "3"]);
}

#[test]
fn test_accordion_never_opens_two_years() {
    let clicks = [2019, 2020, 2020, 2018, 2019, 2019];
    let mut open = None;
    let mut history = Vec::new();
    for year in clicks {
        open = toggle_year(open, year);
        history.push(open);
    }
    assert_eq!(
        history,
        vec![Some(2019), Some(2020), None, Some(2018), Some(2019), None]
    );
}

#[test]
fn test_loading_replaces_list() {
    assert_eq!(drawer_content(true, &sample_rounds()), DrawerContent::Loading);
    assert!(matches!(
        drawer_content(false, &sample_rounds()),
        DrawerContent::Groups(ref g) if g.len() == 2
    ));
}

#[test]
fn test_link_targets_and_labels() {
    let rounds = sample_rounds();
    let links: Vec<(String, String)> = rounds.iter().map(|r| (r.path(), r.label())).collect();
    assert_eq!(
        links,
        vec![
            ("/1".to_string(), "Spring 2020".to_string()),
            ("/2".to_string(), "Fall 2019".to_string()),
            ("/3".to_string(), "Winter 2020".to_string()),
        ]
    );
}
