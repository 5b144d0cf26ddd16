#![allow(dead_code)]

use std::fs;
use std::sync::Arc;

use movie_graph::schema::{build_schema, AppSchema};
use movie_graph::state::{init_app_state, AppState};
use movie_graph::store::JsonFileStore;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tempfile::TempDir;

pub struct TestApi {
    pub schema: AppSchema,
    pub state: Arc<AppState>,
    // keeps the backing files alive for the test's duration
    pub dir: TempDir,
}

/// A schema over a tempdir-backed store seeded with ten users and ten
/// movies, with a fixed-seed rng for deterministic favorite seeding.
pub fn seeded_api() -> TestApi {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("users.json"),
        serde_json::to_vec(&seed_users()).unwrap(),
    )
    .unwrap();
    fs::write(
        dir.path().join("movies.json"),
        serde_json::to_vec(&seed_movies()).unwrap(),
    )
    .unwrap();

    let state = Arc::new(init_app_state(Box::new(JsonFileStore::new(dir.path()))).unwrap());
    *state.rng.lock() = StdRng::seed_from_u64(7);
    let schema = build_schema(Arc::clone(&state));
    TestApi { schema, state, dir }
}

/// The user collection as currently persisted on disk.
pub fn persisted_users(api: &TestApi) -> Value {
    let raw = fs::read_to_string(api.dir.path().join("users.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

pub async fn execute(api: &TestApi, document: &str) -> Value {
    let response = api.schema.execute(document).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    response.data.into_json().unwrap()
}

fn seed_users() -> Value {
    json!([
        {
            "id": "1", "name": "John", "age": 30, "email": "john@example.com",
            "nationality": "American", "isActive": true,
            "friends": ["2", "3"], "favoriteMovies": ["1", "3"]
        },
        {
            "id": "2", "name": "pedro", "age": 27, "email": "pedro@example.com",
            "nationality": "Mexican",
            "friends": ["1"], "favoriteMovies": []
        },
        {
            "id": "3", "name": "Sarah", "age": 34, "email": "sarah@example.com",
            "nationality": "British", "isActive": false,
            "friends": [], "favoriteMovies": ["7"]
        },
        {
            "id": "4", "name": "Aisha", "age": 22, "email": "aisha@example.com",
            "nationality": "Indian",
            "friends": ["1", "99"], "favoriteMovies": []
        },
        {
            "id": "5", "name": "Liam", "email": "liam@example.com",
            "nationality": "Irish", "isActive": true,
            "friends": ["1"], "favoriteMovies": []
        },
        {
            "id": "6", "name": "Chen", "age": 41, "email": "chen@example.com",
            "nationality": "Chinese",
            "friends": [], "favoriteMovies": []
        },
        {
            "id": "7", "name": "Marta", "age": 29, "email": "marta@example.com",
            "nationality": "Italian",
            "friends": ["8"], "favoriteMovies": ["5"]
        },
        {
            "id": "8", "name": "Hans", "age": 52, "email": "hans@example.com",
            "nationality": "German",
            "friends": ["7"], "favoriteMovies": []
        },
        {
            "id": "9", "name": "Claire", "age": 25, "email": "claire@example.com",
            "nationality": "French",
            "friends": ["4"], "favoriteMovies": []
        },
        {
            "id": "10", "name": "Priya", "age": 31, "email": "priya@example.com",
            "nationality": "Indian", "isActive": false,
            "friends": ["4", "6"], "favoriteMovies": []
        }
    ])
}

fn seed_movies() -> Value {
    json!([
        {
            "id": "1", "title": "Interstellar", "isInTheaters": false,
            "rating": 8.7, "releaseYear": 2014, "genre": "Sci-Fi",
            "director": "Christopher Nolan"
        },
        {
            "id": "2", "title": "The Grand Budapest Hotel", "isInTheaters": false,
            "rating": 8.1, "releaseYear": 2014, "genre": "Comedy",
            "director": "Wes Anderson"
        },
        {
            "id": "3", "title": "Parasite", "isInTheaters": false,
            "rating": 8.6, "releaseYear": 2019, "genre": "Thriller",
            "director": "Bong Joon-ho"
        },
        {
            "id": "4", "title": "Inception", "isInTheaters": false,
            "rating": 8.8, "releaseYear": 2010, "genre": "Sci-Fi",
            "director": "Christopher Nolan"
        },
        {
            "id": "5", "title": "La Dolce Vita", "isInTheaters": false,
            "rating": 8.0, "releaseYear": 1960, "genre": "Drama",
            "director": "Federico Fellini"
        },
        {
            "id": "6", "title": "Spirited Away", "isInTheaters": false,
            "rating": 8.6, "releaseYear": 2001, "genre": "Animation"
        },
        {
            "id": "7", "title": "Dune: Part Two", "isInTheaters": true,
            "rating": 8.5, "releaseYear": 2024, "genre": "Sci-Fi",
            "director": "Denis Villeneuve"
        },
        {
            "id": "8", "title": "The Godfather", "isInTheaters": false,
            "rating": 9.2, "releaseYear": 1972, "genre": "Crime",
            "director": "Francis Ford Coppola"
        },
        {
            "id": "9", "title": "Amélie", "isInTheaters": false,
            "rating": 8.3, "releaseYear": 2001, "genre": "Romance",
            "director": "Jean-Pierre Jeunet"
        },
        {
            "id": "10", "title": "Oppenheimer", "isInTheaters": true,
            "rating": 8.4, "releaseYear": 2023, "genre": "Biography",
            "director": "Christopher Nolan"
        }
    ])
}
