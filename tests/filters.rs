// tests/filters.rs
use xpath_gen::config::options::ExtractOptions;
use xpath_gen::filter::{apply_options, Category, FilteredView};
use xpath_gen::render::Summary;
use xpath_gen::sample::sample;

fn opts(non_interactive: bool, text: bool) -> ExtractOptions {
    ExtractOptions {
        include_non_interactive: non_interactive,
        include_text: text,
        ..ExtractOptions::default()
    }
}

#[test]
fn toggle_grid_matches_type_rules() {
    let all = sample();
    for ni in [true, false] {
        for tx in [true, false] {
            let got = apply_options(&all, &opts(ni, tx));
            let want = all
                .iter()
                .filter(|d| (ni || d.kind.is_option_interactive()) && (tx || !d.kind.is_text_bearing()))
                .count();
            assert_eq!(got.len(), want, "non_interactive={ni} text={tx}");
        }
    }
}

#[test]
fn known_counts_for_the_sample() {
    let all = sample();
    assert_eq!(apply_options(&all, &opts(true, true)).len(), 25);
    assert_eq!(apply_options(&all, &opts(false, true)).len(), 14);
    assert_eq!(apply_options(&all, &opts(true, false)).len(), 18);
    assert_eq!(apply_options(&all, &opts(false, false)).len(), 14);
}

#[test]
fn only_interactive_kept_without_non_interactive() {
    let kept = apply_options(&sample(), &opts(false, true));
    assert!(kept.iter().all(|d| d.kind.is_option_interactive()));
}

#[test]
fn categories_narrow_the_sample() {
    let all = sample();
    let len = |c| FilteredView::new(&all, c, "").len();
    assert_eq!(len(Category::All), 25);
    assert_eq!(len(Category::Interactive), 12);
    assert_eq!(len(Category::Forms), 9);
    assert_eq!(len(Category::Links), 3);
    assert_eq!(len(Category::Buttons), 2);
}

#[test]
fn every_view_is_a_subset_in_order() {
    let all = sample();
    for c in Category::ALL {
        let view = FilteredView::new(&all, c, "a");
        assert!(view.row_ix.windows(2).all(|w| w[0] < w[1]));
        assert!(view.row_ix.iter().all(|&i| i < all.len()));
    }
}

#[test]
fn search_is_case_insensitive_and_idempotent() {
    let all = sample();
    let upper = FilteredView::new(&all, Category::All, "EMAIL");
    let lower = FilteredView::new(&all, Category::All, "email");
    assert_eq!(upper.row_ix, lower.row_ix);
    assert_eq!(upper.len(), 1);

}

#[test]
fn searching_the_results_again_changes_nothing() {
    let all = sample();
    let first = FilteredView::new(&all, Category::All, "form");
    assert!(first.len() > 1);

    let rows: Vec<_> = first.iter().cloned().collect();
    let second = FilteredView::new(&rows, Category::All, "FORM");
    assert_eq!(second.row_ix, (0..rows.len()).collect::<Vec<_>>());
    assert_eq!(second.xpaths(), first.xpaths());
}

#[test]
fn search_reads_class_but_not_placeholder() {
    let all = sample();
    assert_eq!(FilteredView::new(&all, Category::All, "nav-link").len(), 2);
    assert_eq!(FilteredView::new(&all, Category::All, "Enter username").len(), 0);
}

#[test]
fn category_and_search_compose() {
    let all = sample();
    let view = FilteredView::new(&all, Category::Forms, "form-control");
    // username, email, password inputs + message textarea
    assert_eq!(view.len(), 4);
}

#[test]
fn full_run_summary() {
    let items = apply_options(&sample(), &ExtractOptions::default());
    assert_eq!(Summary::of(&items), Summary { total: 25, interactive: 12, forms: 9 });
}
