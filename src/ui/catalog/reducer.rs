use crate::filter::{apply_filters, distinct_years, FilterQuery, SortOption};
use crate::ui::catalog::intent::CatalogIntent;
use crate::ui::catalog::state::{CatalogState, CatalogView};
use crate::ui::mvi::Reducer;

pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (CatalogState::Loading, CatalogIntent::Loaded { catalog }) => {
                // Years and the first render come from the same snapshot.
                let years = distinct_years(catalog.books());
                let visible = catalog.books().to_vec();
                CatalogState::Ready(CatalogView {
                    catalog,
                    years,
                    query: FilterQuery::default(),
                    visible,
                    selected: 0,
                })
            }
            (CatalogState::Loading, CatalogIntent::LoadFailed { message }) => {
                CatalogState::Failed { message }
            }
            (CatalogState::Ready(view), intent) => CatalogState::Ready(reduce_ready(view, intent)),
            // Loading or failed: controls are inert, late fetch results ignored.
            (other, _) => other,
        }
    }
}

fn reduce_ready(mut view: CatalogView, intent: CatalogIntent) -> CatalogView {
    match intent {
        CatalogIntent::Loaded { .. } | CatalogIntent::LoadFailed { .. } => view,
        CatalogIntent::SetSearch { text } => {
            view.query.search = text;
            refilter(view)
        }
        CatalogIntent::InsertChar(ch) => {
            view.query.search.push(ch);
            refilter(view)
        }
        CatalogIntent::DeleteChar => {
            if view.query.search.pop().is_none() {
                return view;
            }
            refilter(view)
        }
        CatalogIntent::SetYear(year) => {
            view.query.year = year;
            refilter(view)
        }
        CatalogIntent::NextYear => {
            view.query.year = step(&year_options(&view.years), &view.query.year, 1);
            refilter(view)
        }
        CatalogIntent::PrevYear => {
            view.query.year = step(&year_options(&view.years), &view.query.year, -1);
            refilter(view)
        }
        CatalogIntent::SetSort(sort) => {
            view.query.sort = sort;
            refilter(view)
        }
        CatalogIntent::NextSort => {
            view.query.sort = step(&sort_options(), &view.query.sort, 1);
            refilter(view)
        }
        CatalogIntent::PrevSort => {
            view.query.sort = step(&sort_options(), &view.query.sort, -1);
            refilter(view)
        }
        CatalogIntent::ClearFilters => {
            view.query = FilterQuery::default();
            refilter(view)
        }
        CatalogIntent::Move { delta } => {
            if view.visible.is_empty() {
                view.selected = 0;
                return view;
            }
            let last = view.visible.len() - 1;
            let target = view.selected as isize + delta;
            view.selected = target.clamp(0, last as isize) as usize;
            view
        }
    }
}

/// Recomputes the visible subset from the full catalog, keeping the
/// selected book selected when it survives the new filters.
fn refilter(mut view: CatalogView) -> CatalogView {
    let previous = view.selected_book().map(|book| book.number);
    view.visible = apply_filters(view.catalog.books(), &view.query);
    view.selected = previous
        .and_then(|number| view.visible.iter().position(|book| book.number == number))
        .unwrap_or(0);
    view
}

fn year_options(years: &[i32]) -> Vec<Option<i32>> {
    std::iter::once(None)
        .chain(years.iter().copied().map(Some))
        .collect()
}

fn sort_options() -> Vec<Option<SortOption>> {
    std::iter::once(None)
        .chain(SortOption::ALL.into_iter().map(Some))
        .collect()
}

/// Cycles through `options` from `current`, wrapping at both ends.
fn step<T: PartialEq + Clone>(options: &[T], current: &T, delta: isize) -> T {
    let len = options.len() as isize;
    let index = options.iter().position(|o| o == current).unwrap_or(0) as isize;
    let next = (index + delta).rem_euclid(len);
    options[next as usize].clone()
}
