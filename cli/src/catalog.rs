//! Fetches the catalog collections and runs them through the query
//! engine, printing the resulting view.

use anyhow::{bail, Context, Result};
use grovedex_core::{
    critter_table, recipe_table, view, CritterCatalog, FilterValue, HourQuery, HttpCatalogStore,
    Readiness, RecipeCatalog, ScheduleQuery, Selection, SortDirection, SortSpec, TableSpec,
    TableState, Weekday,
};

pub struct RecipeQueryArgs {
    pub search: Option<String>,
    pub kind: Option<String>,
    pub collection: Option<String>,
    pub ingredients: Vec<String>,
    pub sort: Option<String>,
    pub desc: bool,
}

pub struct CritterQueryArgs {
    pub search: Option<String>,
    pub kind: Option<String>,
    pub location: Option<String>,
    pub day: Option<String>,
    pub hour: Option<String>,
    pub now: bool,
    pub sort: Option<String>,
    pub desc: bool,
}

pub async fn ping(server: &str) -> Result<()> {
    #[derive(serde::Deserialize)]
    struct PingResponse {
        message: String,
    }

    let response: PingResponse = reqwest::get(format!("{}/api/ping", server))
        .await
        .context("Failed to reach server")?
        .error_for_status()?
        .json()
        .await?;

    println!("{}", response.message);
    Ok(())
}

pub async fn browse_recipes(server: &str, args: RecipeQueryArgs) -> Result<()> {
    let store = HttpCatalogStore::new(server).context("Failed to build HTTP client")?;
    let catalog = RecipeCatalog::load(&store).await;

    match catalog.readiness() {
        Readiness::Failed(error) => bail!("Could not load the recipe table: {}", error),
        Readiness::Loading => unreachable!("load() resolves both collections"),
        Readiness::Ready => {}
    }

    let spec = recipe_table();
    let mut state = TableState::new();

    if let Some(search) = args.search {
        state.set_search(search);
    }
    if let Some(kind) = args.kind.filter(|choice| !is_any(choice)) {
        state.set_filter("type", FilterValue::Choice(kind));
    }
    if let Some(collection) = args.collection.filter(|choice| !is_any(choice)) {
        state.set_filter("collection", FilterValue::Choice(collection));
    }

    let mut selection = Selection::new();
    for name in args.ingredients {
        selection.add(name);
    }
    if !selection.is_empty() {
        state.set_filter("ingredients", FilterValue::Names(selection.names().to_vec()));
    }

    apply_sort(&mut state, &spec, args.sort, args.desc)?;

    let recipes = catalog.recipes().expect("readiness was checked");
    print_view(&view(recipes, &spec, &state), &spec);
    Ok(())
}

pub async fn browse_critters(server: &str, mut args: CritterQueryArgs) -> Result<()> {
    let store = HttpCatalogStore::new(server).context("Failed to build HTTP client")?;
    let catalog = CritterCatalog::load(&store).await;

    match catalog.readiness() {
        Readiness::Failed(error) => bail!("Could not load the critter table: {}", error),
        Readiness::Loading => unreachable!("load() resolves the collection"),
        Readiness::Ready => {}
    }

    let spec = critter_table();
    let mut state = TableState::new();

    if let Some(search) = args.search.take() {
        state.set_search(search);
    }
    if let Some(kind) = args.kind.take().filter(|choice| !is_any(choice)) {
        state.set_filter("type", FilterValue::Choice(kind));
    }
    if let Some(location) = args.location.take().filter(|choice| !is_any(choice)) {
        state.set_filter("location", FilterValue::Choice(location));
    }

    if let Some(query) = schedule_query(&args)? {
        state.set_filter("schedule", FilterValue::Schedule(query));
    }

    apply_sort(&mut state, &spec, args.sort, args.desc)?;

    let critters = catalog.critters().expect("readiness was checked");
    print_view(&view(critters, &spec, &state), &spec);
    Ok(())
}

/// "All"/"Any" is the clear-the-filter choice, never a literal match.
fn is_any(choice: &str) -> bool {
    choice.eq_ignore_ascii_case("all") || choice.eq_ignore_ascii_case("any")
}

fn schedule_query(args: &CritterQueryArgs) -> Result<Option<ScheduleQuery>> {
    if args.now {
        return Ok(Some(ScheduleQuery::now()));
    }

    let day = match &args.day {
        Some(text) => Some(
            Weekday::from_str(text)
                .with_context(|| format!("Unknown weekday: {}", text))?,
        ),
        None => None,
    };
    let hour = match &args.hour {
        Some(text) => Some(parse_hour(text)?),
        None => None,
    };

    if day.is_none() && hour.is_none() {
        return Ok(None);
    }
    Ok(Some(ScheduleQuery {
        day,
        hour,
        minute: 0,
    }))
}

/// Accepts "all-day", a 12-hour label like "9 PM", or a bare 24-hour
/// number.
fn parse_hour(text: &str) -> Result<HourQuery> {
    if text.eq_ignore_ascii_case("all-day") {
        return Ok(HourQuery::AllDay);
    }
    if let Ok(hour) = text.parse::<u32>() {
        if hour > 23 {
            bail!("Hour out of range: {}", hour);
        }
        return Ok(HourQuery::At(hour));
    }
    let hour = grovedex_core::to_24_hour(text)
        .with_context(|| format!("Could not parse hour: {}", text))?;
    Ok(HourQuery::At(hour))
}

fn apply_sort<R>(
    state: &mut TableState,
    spec: &TableSpec<R>,
    sort: Option<String>,
    desc: bool,
) -> Result<()> {
    let Some(key) = sort else {
        return Ok(());
    };
    let column = spec
        .columns
        .iter()
        .find(|column| column.key == key && column.comparator.is_some())
        .with_context(|| format!("Not a sortable column: {}", key))?;
    state.set_sort(Some(SortSpec {
        key: column.key,
        direction: if desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        },
    }));
    Ok(())
}

/// Print one line per row, cells from the column accessors. Image
/// columns are no use in a terminal and are skipped.
fn print_view<R>(view: &grovedex_core::View<'_, R>, spec: &TableSpec<R>) {
    if view.is_empty() {
        println!("{}", view.empty_message);
        return;
    }

    let columns: Vec<_> = spec
        .columns
        .iter()
        .filter(|column| column.key != "image_url")
        .collect();

    let header: Vec<&str> = columns.iter().map(|column| column.key).collect();
    println!("{}", header.join(" | "));

    for row in &view.rows {
        let cells: Vec<String> = columns.iter().map(|column| (column.accessor)(row)).collect();
        println!("{}", cells.join(" | "));
    }
    println!();
    println!("{} shown", view.len());
}
