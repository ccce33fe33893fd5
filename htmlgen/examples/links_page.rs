use htmlgen::{bumpalo::Bump, each, pages::Page, Builder};

fn main() {
    let items = ["aardvark", "badger", "capybara", "dingo", "echidna"];

    let bump = Bump::new();
    let b = Builder::new(&bump);
    let tags = b.catalog();

    let page = b
        .composite(
            Page::new(&b, "Links Page", Some("random.css")).with_jquery(),
            (
                tags.h3.with("Links to Random Stuff"),
                each(items.map(|item| {
                    let img = tags.img.with_attrs([
                        b.attr(("src", format!("{item}.jpg"))),
                        b.attr(("alt", format!("a picture of {item}"))),
                    ]);
                    tags.a
                        .extend((img, item), [b.attr(("href", format!("{item}.html")))])
                        + tags.br
                })),
            ),
            [],
        )
        .expect("the page skeleton embeds its body");

    println!("{page}");
}
