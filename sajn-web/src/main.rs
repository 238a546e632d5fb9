use sajn_web::App;

fn main() {
    dioxus::launch(App);
}
