//! Seed fixture
//!
//! The canonical sample catalog used by tests and demo callers. Ids fall
//! out of the shared counter in insertion order, which the fixture relies
//! on: "Spaghetti Carbonara" is recipe 1, "Eggs" is ingredient 2, and so
//! on. Reorder with care: the integration tests address entities by id.

use crate::CatalogStore;
use larder_model::MeasurementUnit::{Grams, Millilitres, Pieces, Tablespoons};

/// Build a fully linked sample catalog.
///
/// The fixture covers every lookup and cascade path: an ingredient used
/// by exactly one recipe (Eggs), ingredients shared by two (Parmesan
/// Cheese, Salmon), one used by none (Saffron), and three diets whose
/// compatibility rows partition the recipes.
pub fn sample_catalog() -> CatalogStore {
    let mut store = CatalogStore::new();

    // id 1
    let carbonara = store.add_recipe(
        "Spaghetti Carbonara",
        "Roman pasta with eggs, cured pork and cheese",
        2,
    );
    let eggs = store.add_ingredient("Eggs"); // id 2
    let spaghetti = store.add_ingredient("Spaghetti"); // id 3
    let pancetta = store.add_ingredient("Pancetta"); // id 4
    let parmesan = store.add_ingredient("Parmesan Cheese"); // id 5

    // id 6
    let pizza = store.add_recipe("Margherita Pizza", "Tomato, mozzarella and basil pizza", 4);
    let dough = store.add_ingredient("Pizza Dough"); // id 7
    let tomato_sauce = store.add_ingredient("Tomato Sauce"); // id 8
    let mozzarella = store.add_ingredient("Mozzarella"); // id 9

    // id 10
    let grilled_salmon = store.add_recipe("Grilled Salmon", "Salmon fillet with lemon", 2);
    let salmon = store.add_ingredient("Salmon"); // id 11
    let lemon = store.add_ingredient("Lemon"); // id 12

    // id 13
    let teriyaki = store.add_recipe("Salmon Teriyaki", "Salmon glazed in soy and sugar", 3);
    let soy_sauce = store.add_ingredient("Soy Sauce"); // id 14

    // id 15
    let salad = store.add_recipe("Garden Salad", "Crisp greens with lemon dressing", 2);
    let lettuce = store.add_ingredient("Lettuce"); // id 16
    let cucumber = store.add_ingredient("Cucumber"); // id 17

    // id 18
    let smoothie = store.add_recipe("Fruit Smoothie", "Blended banana and strawberries", 1);
    let banana = store.add_ingredient("Banana"); // id 19
    let strawberries = store.add_ingredient("Strawberries"); // id 20

    // Stocked but unused by any recipe.
    let saffron = store.add_ingredient("Saffron"); // id 21

    let vegetarian = store.add_dietary_restriction("Vegetarian"); // id 22
    let vegan = store.add_dietary_restriction("Vegan"); // id 23
    let gluten_free = store.add_dietary_restriction("Gluten-Free"); // id 24

    store.link_ingredient(carbonara, eggs, 3.0, Pieces);
    store.link_ingredient(carbonara, spaghetti, 200.0, Grams);
    store.link_ingredient(carbonara, pancetta, 100.0, Grams);
    store.link_ingredient(carbonara, parmesan, 50.0, Grams);

    store.link_ingredient(pizza, dough, 1.0, Pieces);
    store.link_ingredient(pizza, tomato_sauce, 120.0, Millilitres);
    store.link_ingredient(pizza, mozzarella, 150.0, Grams);
    store.link_ingredient(pizza, parmesan, 30.0, Grams);

    store.link_ingredient(grilled_salmon, salmon, 300.0, Grams);
    store.link_ingredient(grilled_salmon, lemon, 1.0, Pieces);

    store.link_ingredient(teriyaki, salmon, 250.0, Grams);
    store.link_ingredient(teriyaki, soy_sauce, 2.0, Tablespoons);

    store.link_ingredient(salad, lettuce, 1.0, Pieces);
    store.link_ingredient(salad, cucumber, 1.0, Pieces);
    store.link_ingredient(salad, lemon, 0.5, Pieces);

    store.link_ingredient(smoothie, banana, 2.0, Pieces);
    store.link_ingredient(smoothie, strawberries, 150.0, Grams);

    // Vegetarian admits everything except the meat and fish.
    for ingredient in [
        eggs,
        spaghetti,
        parmesan,
        dough,
        tomato_sauce,
        mozzarella,
        lemon,
        soy_sauce,
        lettuce,
        cucumber,
        banana,
        strawberries,
        saffron,
    ] {
        store.link_restriction(ingredient, vegetarian);
    }

    for ingredient in [
        spaghetti,
        dough,
        tomato_sauce,
        lemon,
        soy_sauce,
        lettuce,
        cucumber,
        banana,
        strawberries,
        saffron,
    ] {
        store.link_restriction(ingredient, vegan);
    }

    // Gluten hides in the pasta, the dough and the soy sauce.
    for ingredient in [
        eggs,
        pancetta,
        parmesan,
        tomato_sauce,
        mozzarella,
        salmon,
        lemon,
        lettuce,
        cucumber,
        banana,
        strawberries,
        saffron,
    ] {
        store.link_restriction(ingredient, gluten_free);
    }

    store
}
