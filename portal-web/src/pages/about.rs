use yew::prelude::*;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="py-12 container mx-auto px-4 max-w-3xl">
            <h1 class="text-4xl font-bold text-gray-900 mb-6">{"Nosotros"}</h1>
            <div class="prose prose-lg text-gray-700 space-y-4">
                <p>
                    {"La Institución Educativa José Abelardo Quiñones Gonzales forma \
                     estudiantes comprometidos con su comunidad, combinando la \
                     excelencia académica con la práctica de valores."}
                </p>
                <h2 class="text-2xl font-semibold">{"Misión"}</h2>
                <p>
                    {"Brindar una educación integral y de calidad que desarrolle las \
                     capacidades de nuestros estudiantes."}
                </p>
                <h2 class="text-2xl font-semibold">{"Visión"}</h2>
                <p>
                    {"Ser una institución líder en la región, reconocida por la \
                     formación académica y humana de sus egresados."}
                </p>
            </div>
        </div>
    }
}
