use maud::{html, Markup};

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🏠",
        title: "Advanced ML Algorithms",
        description: "Our sophisticated machine learning models analyze thousands of data points to provide accurate predictions.",
    },
    Feature {
        icon: "📊",
        title: "Real-time Market Data",
        description: "Get predictions based on the latest market trends and comparable property sales in your area.",
    },
    Feature {
        icon: "⚡",
        title: "Instant Results",
        description: "Receive your property valuation in seconds, not days. No waiting for manual appraisals.",
    },
    Feature {
        icon: "🎯",
        title: "High Accuracy",
        description: "Our models achieve 98% accuracy by continuously learning from new market data and sales.",
    },
    Feature {
        icon: "🔒",
        title: "Secure & Private",
        description: "Your property information is encrypted and never shared with third parties.",
    },
    Feature {
        icon: "📱",
        title: "Mobile Friendly",
        description: "Access predictions anywhere, anytime with our fully responsive design.",
    },
];

pub fn features_section() -> Markup {
    html! {
        section id="features" class="py-20 px-4 bg-muted" {
            div class="max-w-6xl mx-auto" {
                div class="text-center mb-16" {
                    h2 class="text-4xl font-bold text-primary mb-4" { "Why Choose Our AI Predictions?" }
                    p class="text-xl text-muted-foreground max-w-3xl mx-auto" {
                        "Experience the power of cutting-edge technology combined with comprehensive market analysis"
                    }
                }

                div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8" {
                    @for feature in &FEATURES {
                        div class="feature-card bg-card p-6 rounded-lg shadow-elegant" {
                            div class="text-4xl mb-4" { (feature.icon) }
                            h3 class="text-xl font-semibold text-primary mb-3" { (feature.title) }
                            p class="text-muted-foreground" { (feature.description) }
                        }
                    }
                }
            }
        }
    }
}
