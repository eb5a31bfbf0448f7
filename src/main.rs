fn main() {
    dioxus::launch(portfolio_site::routes::App);
}
