use yew::prelude::*;

use crate::containers::header::Header;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

/// Public site frame: header, content, footer.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-white">
            <Header />
            <main class="flex-grow">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-6 bg-gray-900 text-gray-300">
                <div>
                    <p class="font-semibold">{"I.E. José Abelardo Quiñones Gonzales"}</p>
                    <p>{"contacto@iejaqg.edu.pe · +51 999 999 999"}</p>
                </div>
            </footer>
        </div>
    }
}
