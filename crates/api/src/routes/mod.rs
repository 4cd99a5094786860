use rocket::{Build, Rocket};

mod favorites;
mod root;

pub fn mount(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount("/", routes![root::root])
        .mount("/favorites", favorites::routes())
}
