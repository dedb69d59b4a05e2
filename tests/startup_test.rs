mod helpers;

use std::path::Path;
use std::sync::Arc;

use helpers::{csv_file, KeywordProvider, KEYWORD_MODEL, VOCAB};
use pantry::config::PantryConfig;
use pantry::error::PantryError;
use pantry::recipes::dataset::load_recipes;
use pantry::recipes::search::Recommender;
use tempfile::TempDir;

const RECIPES_CSV: &str = "\
Recipe Name,Ingredients,Instructions,Prep Time
Masala Omelette,\"Tomato, Onion, Egg\",Whisk and fry.,10
Jeera Rice,,Fry cumin and add rice.,20
Aloo Matar,\"Potato, Pea, Cumin\",\"Temper cumin, add potato.\",30
";

#[test]
fn missing_dataset_fails_before_model_load() {
    let tmp = TempDir::new().unwrap();
    let mut config = PantryConfig::default();
    config.dataset.path = tmp.path().join("absent.csv").to_string_lossy().into_owned();
    // model dir is empty as well; the dataset error must win
    config.embedding.cache_dir = tmp.path().to_string_lossy().into_owned();

    let err = Recommender::startup(&config, false).err().expect("startup must fail");
    assert!(matches!(err, PantryError::DatasetLoad { .. }));
    assert!(err.is_fatal());
}

#[test]
fn missing_model_is_model_unavailable() {
    let csv = csv_file(RECIPES_CSV);
    let tmp = TempDir::new().unwrap();
    let mut config = PantryConfig::default();
    config.dataset.path = csv.path().to_string_lossy().into_owned();
    config.embedding.cache_dir = tmp.path().to_string_lossy().into_owned();

    let err = Recommender::startup(&config, false).err().expect("startup must fail");
    assert!(matches!(err, PantryError::ModelUnavailable(_)));
    assert!(err.is_fatal());
}

#[test]
fn dataset_loads_with_blank_ingredients() {
    let csv = csv_file(RECIPES_CSV);
    let rows = load_recipes(csv.path()).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[1].name, "Jeera Rice");
    assert_eq!(rows[1].ingredients, "");
    assert_eq!(rows[2].instructions, "Temper cumin, add potato.");
}

#[test]
fn dataset_without_required_columns_is_rejected() {
    let csv = csv_file("Name,Ingredients\nDal,Lentils\n");
    let err = load_recipes(csv.path()).unwrap_err();
    match err {
        PantryError::DatasetLoad { reason, .. } => {
            assert!(reason.contains("Recipe Name"), "got: {reason}");
            assert!(reason.contains("Instructions"), "got: {reason}");
        }
        other => panic!("expected DatasetLoad, got {other:?}"),
    }
}

#[test]
fn dataset_error_for_missing_file() {
    let err = load_recipes(Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, PantryError::DatasetLoad { .. }));
}

#[test]
fn loaded_dataset_feeds_the_pipeline() {
    let csv = csv_file(RECIPES_CSV);
    let rows = load_recipes(csv.path()).unwrap();
    let r = Recommender::from_rows(rows, Arc::new(KeywordProvider), &PantryConfig::default(), false)
        .unwrap();

    let results = r.recommend("potato peas cumin").unwrap();
    assert_eq!(results[0].recipe.name, "Aloo Matar");
    assert_eq!(r.corpus().model(), KEYWORD_MODEL);
    assert_eq!(r.corpus().dimensions(), VOCAB.len());
}

#[test]
fn top_k_comes_from_config() {
    let csv = csv_file(RECIPES_CSV);
    let rows = load_recipes(csv.path()).unwrap();
    let mut config = PantryConfig::default();
    config.ranking.top_k = 1;
    let r = Recommender::from_rows(rows, Arc::new(KeywordProvider), &config, false).unwrap();

    assert_eq!(r.recommend("egg").unwrap().len(), 1);
}

#[test]
fn bundled_dataset_is_well_formed() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("indian_recipes.csv");
    let rows = load_recipes(&path).unwrap();

    assert_eq!(rows.len(), 10);
    let khichdi = rows.iter().find(|r| r.name == "Plain Khichdi").unwrap();
    assert_eq!(khichdi.ingredients, "");
}
