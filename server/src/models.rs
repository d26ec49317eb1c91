use diesel::prelude::*;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeRow {
    pub id: i32,
    pub image_url: String,
    pub name: String,
    pub type_id: i32,
    pub stars: i32,
    pub energy: i32,
    pub sell_price: i32,
    pub collection_id: i32,
    /// Array of ingredient ids; a nested array denotes a substitution
    /// group.
    pub ingredient_ids: serde_json::Value,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeTypeRow {
    pub id: i32,
    pub name: String,
    pub image_url: String,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::collections)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct CollectionRow {
    pub id: i32,
    pub name: String,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct IngredientRow {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub ingredient_type_id: i32,
    pub is_generic: bool,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::ingredient_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct IngredientTypeRow {
    pub id: i32,
    pub name: String,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::critters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct CritterRow {
    pub id: i32,
    pub name: String,
    pub image_url: String,
    pub critter_type_id: i32,
    /// Seven-day availability object, each day a bool or a window
    /// string.
    pub schedule: serde_json::Value,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::critter_types)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct CritterTypeRow {
    pub id: i32,
    pub name: String,
    pub location_id: i32,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::locations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct LocationRow {
    pub id: i32,
    pub name: String,
    pub image_url: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub image_url: &'a str,
    pub name: &'a str,
    pub type_id: i32,
    pub stars: i32,
    pub energy: i32,
    pub sell_price: i32,
    pub collection_id: i32,
    pub ingredient_ids: serde_json::Value,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_types)]
pub struct NewRecipeType<'a> {
    pub name: &'a str,
    pub image_url: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::collections)]
pub struct NewCollection<'a> {
    pub name: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredient<'a> {
    pub name: &'a str,
    pub image_url: &'a str,
    pub ingredient_type_id: i32,
    pub is_generic: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ingredient_types)]
pub struct NewIngredientType<'a> {
    pub name: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::critters)]
pub struct NewCritter<'a> {
    pub name: &'a str,
    pub image_url: &'a str,
    pub critter_type_id: i32,
    pub schedule: serde_json::Value,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::critter_types)]
pub struct NewCritterType<'a> {
    pub name: &'a str,
    pub location_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::locations)]
pub struct NewLocation<'a> {
    pub name: &'a str,
    pub image_url: &'a str,
}
