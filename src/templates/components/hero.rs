use maud::{html, Markup};

const STATS: [(&str, &str); 3] = [
    ("98%", "Accuracy Rate"),
    ("10K+", "Properties Analyzed"),
    ("5 sec", "Average Prediction Time"),
];

pub fn hero_section() -> Markup {
    html! {
        section id="hero" class="hero relative min-h-screen flex items-center justify-center overflow-hidden" {
            div class="hero-backdrop absolute inset-0 bg-cover bg-center" style="background-image: url('/static/hero-house.svg')" {
                div class="absolute inset-0 bg-gradient-hero opacity-75" {}
            }

            div class="relative z-10 text-center text-white px-4 max-w-4xl mx-auto" {
                h1 class="text-5xl md:text-7xl font-bold mb-6 animate-fadeIn" {
                    "Predict Your"
                    span class="block bg-gradient-accent bg-clip-text text-transparent" { "Dream Home's Value" }
                }

                p class="text-xl md:text-2xl mb-8 text-gray-200" {
                    "Get instant, AI-powered house price predictions based on advanced machine learning algorithms"
                }

                div class="flex flex-col sm:flex-row gap-4 justify-center" {
                    a href="#prediction-form" class="btn btn-accent" { "Get Price Prediction" }
                    a href="#features" class="btn btn-outline" { "Learn More" }
                }

                div class="mt-16 grid grid-cols-1 md:grid-cols-3 gap-8 text-center" {
                    @for (value, label) in STATS {
                        div {
                            div class="text-3xl font-bold text-accent mb-2" { (value) }
                            div class="text-gray-300" { (label) }
                        }
                    }
                }
            }
        }
    }
}
