//! Deterministic sample dataset shaped like the public JSONPlaceholder data.
//!
//! 10 users, each owning 10 posts, 10 albums and 20 todos; every post has 5
//! comments and every album 50 photos.

use crate::domain::{Address, Album, Comment, Company, Geo, Photo, Post, Todo, User};
use crate::storage::dataset::Dataset;

const POSTS_PER_USER: usize = 10;
const COMMENTS_PER_POST: usize = 5;
const ALBUMS_PER_USER: usize = 10;
const PHOTOS_PER_ALBUM: usize = 50;
const TODOS_PER_USER: usize = 20;

struct Person {
    name: &'static str,
    username: &'static str,
    email: &'static str,
    city: &'static str,
    company: &'static str,
}

const PEOPLE: [Person; 10] = [
    Person { name: "Leanne Graham", username: "Bret", email: "Sincere@april.biz", city: "Gwenborough", company: "Romaguera-Crona" },
    Person { name: "Ervin Howell", username: "Antonette", email: "Shanna@melissa.tv", city: "Wisokyburgh", company: "Deckow-Crist" },
    Person { name: "Clementine Bauch", username: "Samantha", email: "Nathan@yesenia.net", city: "McKenziehaven", company: "Romaguera-Jacobson" },
    Person { name: "Patricia Lebsack", username: "Karianne", email: "Julianne.OConner@kory.org", city: "South Elvis", company: "Robel-Corkery" },
    Person { name: "Chelsey Dietrich", username: "Kamren", email: "Lucio_Hettinger@annie.ca", city: "Roscoeview", company: "Keebler LLC" },
    Person { name: "Mrs. Dennis Schulist", username: "Leopoldo_Corkery", email: "Karley_Dach@jasper.info", city: "South Christy", company: "Considine-Lockman" },
    Person { name: "Kurtis Weissnat", username: "Elwyn_Skiles", email: "Telly.Hoeger@billy.biz", city: "Howemouth", company: "Johns Group" },
    Person { name: "Nicholas Runolfsdottir V", username: "Maxime_Nienow", email: "Sherwood@rosamond.me", city: "Aliyaview", company: "Abernathy Group" },
    Person { name: "Glenna Reichert", username: "Delphine", email: "Chaim_McDermott@dana.io", city: "Bartholomebury", company: "Yost and Sons" },
    Person { name: "Clementina DuBuque", username: "Moriah_Stanton", email: "Rey.Padberg@karina.biz", city: "Lebsackbury", company: "Hoeger LLC" },
];

const WORDS: [&str; 24] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipisci", "velit", "quia",
    "voluptas", "aut", "molestiae", "eum", "rerum", "nostrum", "explicabo", "facere",
    "repellat", "provident", "occaecati", "excepturi", "optio", "reprehenderit", "nesciunt",
];

/// Build the sample dataset.
#[must_use]
pub fn sample_dataset() -> Dataset {
    let mut ds = Dataset::default();

    for (index, person) in PEOPLE.iter().enumerate() {
        let user = ds.users.insert(sample_user(index, person));

        for _ in 0..POSTS_PER_USER {
            let seq = ds.posts.next_id();
            let post = ds.posts.insert(Post {
                user_id: user.id,
                id: 0,
                title: words(seq, 6),
                body: paragraph(seq),
            });

            for _ in 0..COMMENTS_PER_POST {
                let seq = ds.comments.next_id();
                ds.comments.insert(Comment {
                    post_id: post.id,
                    id: 0,
                    name: words(seq, 5),
                    email: format!("{}{seq}@example.com", WORDS[index_of(seq, 7)]),
                    body: paragraph(seq),
                });
            }
        }

        for _ in 0..ALBUMS_PER_USER {
            let seq = ds.albums.next_id();
            let album = ds.albums.insert(Album {
                user_id: user.id,
                id: 0,
                title: words(seq, 4),
            });

            for _ in 0..PHOTOS_PER_ALBUM {
                let seq = ds.photos.next_id();
                let color = color_for(seq);
                ds.photos.insert(Photo {
                    album_id: album.id,
                    id: 0,
                    title: words(seq, 5),
                    url: format!("https://via.placeholder.com/600/{color}"),
                    thumbnail_url: format!("https://via.placeholder.com/150/{color}"),
                });
            }
        }

        for _ in 0..TODOS_PER_USER {
            let seq = ds.todos.next_id();
            ds.todos.insert(Todo {
                user_id: user.id,
                id: 0,
                title: words(seq, 4),
                completed: seq % 3 != 0,
            });
        }
    }

    ds
}

fn sample_user(index: usize, person: &Person) -> User {
    let n = index + 1;
    User {
        id: 0,
        name: person.name.to_string(),
        username: person.username.to_string(),
        email: person.email.to_string(),
        address: Address {
            street: format!("{} Street", capitalize(WORDS[index_of(n as i64, 3)])),
            suite: format!("Apt. {}", 100 + n * 37),
            city: person.city.to_string(),
            zipcode: format!("{:05}-{:04}", 10_000 + n * 7919, n * 131),
            geo: Geo {
                lat: format!("{:.4}", (n as f64).mul_add(7.5, -40.0)),
                lng: format!("{:.4}", (n as f64).mul_add(-13.25, 80.0)),
            },
        },
        phone: format!("1{:010}", 7_707_368_031_u64 + n as u64 * 1_234_567),
        website: format!("https://{}.example.org", person.username.to_lowercase().replace('_', "-")),
        company: Company {
            name: person.company.to_string(),
            catch_phrase: capitalize(&words(n as i64 * 11, 4)),
            bs: words(n as i64 * 13, 3),
        },
    }
}

fn index_of(seed: i64, salt: usize) -> usize {
    (seed.unsigned_abs() as usize)
        .wrapping_mul(31)
        .wrapping_add(salt * 17)
        % WORDS.len()
}

fn words(seed: i64, count: usize) -> String {
    (0..count)
        .map(|i| WORDS[index_of(seed, i)])
        .collect::<Vec<_>>()
        .join(" ")
}

fn paragraph(seed: i64) -> String {
    (0..3)
        .map(|line| words(seed + line, 8))
        .collect::<Vec<_>>()
        .join("\n")
}

fn color_for(seed: i64) -> String {
    format!("{:06x}", (seed.unsigned_abs() * 2_654_435_761) & 0x00ff_ffff)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
