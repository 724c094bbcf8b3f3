//! Server-rendered roster page
//!
//! Purely a function of the query state, the derived view-model and the
//! current filters.

use maud::{html, Markup, DOCTYPE};

use navemae_common::display::{
    display_or_na, rating_display, specialties_display, status_label, status_tone,
};
use navemae_common::view_model::{EmptyState, AVERAGE_PERFORMANCE_PLACEHOLDER};
use navemae_common::{Artist, ArtistViewModel, FilterState};

/// Number of placeholder cards shown while the listing loads
pub const SKELETON_CARD_COUNT: usize = 6;

const STATUS_OPTIONS: [(&str, &str); 3] = [
    ("all", "Todos os Status"),
    ("active", "Ativo"),
    ("inactive", "Inativo"),
];

// TODO: load studio options from the backend once artists carry a studio id
const STUDIO_OPTIONS: [(&str, &str); 3] = [
    ("all", "Todos os Estúdios"),
    ("studio1", "Estúdio 1"),
    ("studio2", "Estúdio 2"),
];

/// Everything the page needs to render
pub struct DashboardPage<'a> {
    pub loading: bool,
    pub error: Option<&'a str>,
    pub view_model: &'a ArtistViewModel,
    pub filters: &'a FilterState,
}

pub fn render(page: &DashboardPage<'_>) -> Markup {
    let vm = page.view_model;

    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Tatuadores · Nave-Mãe" }
                link rel="stylesheet" href="/static/dashboard.css";
            }
            body {
                main.dashboard {
                    section.metrics {
                        (metric_card("metric-purple", "Total de Tatuadores", vm.total_count.to_string()))
                        (metric_card("metric-green", "Tatuadores Ativos", vm.active_count.to_string()))
                        (metric_card("metric-yellow", "Em Destaque", vm.featured_count.to_string()))
                        (metric_card(
                            "metric-blue",
                            "Performance Média",
                            format!("{:.1}", AVERAGE_PERFORMANCE_PLACEHOLDER),
                        ))
                    }

                    (filter_form(page.filters))

                    @if let Some(error) = page.error {
                        div.error-notice role="alert" {
                            "Não foi possível carregar os tatuadores: " (error)
                        }
                    }

                    section.artist-grid {
                        @if page.loading {
                            @for _ in 0..SKELETON_CARD_COUNT {
                                div.card.skeleton {
                                    div.line.line-title {}
                                    div.line {}
                                    div.line {}
                                }
                            }
                        } @else {
                            @for artist in &vm.filtered {
                                (artist_card(artist))
                            }
                        }
                    }

                    @if !page.loading {
                        @if let Some(empty) = vm.empty_state(page.filters) {
                            div.empty-state {
                                h3 { "Nenhum tatuador encontrado" }
                                p { (empty_state_message(empty)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn empty_state_message(empty: EmptyState) -> &'static str {
    match empty {
        EmptyState::NoMatches => "Tente ajustar os filtros de busca",
        EmptyState::NoArtists => "Adicione o primeiro tatuador à rede",
    }
}

fn metric_card(class: &str, label: &str, value: String) -> Markup {
    html! {
        div class=(format!("card metric {}", class)) {
            p.metric-label { (label) }
            p.metric-value { (value) }
        }
    }
}

fn filter_form(filters: &FilterState) -> Markup {
    let status = filters.status_filter.as_str();
    let studio = filters.studio_filter.as_str();

    html! {
        form.card.filters method="get" action="/" {
            input type="search" name="search" placeholder="Buscar tatuadores..."
                value=(filters.search_term);
            select name="status" {
                @for (value, label) in STATUS_OPTIONS {
                    option value=(value) selected[value == status] { (label) }
                }
            }
            select name="studio" {
                @for (value, label) in STUDIO_OPTIONS {
                    option value=(value) selected[value == studio] { (label) }
                }
            }
            button type="submit" { "Filtrar" }
            button.primary type="button" disabled { "Novo Tatuador" }
        }
    }
}

fn artist_card(artist: &Artist) -> Markup {
    html! {
        article.card.artist-card data-artist-id=(artist.id.to_string()) {
            header {
                div {
                    h2 { (artist.full_name()) }
                    p.email { (display_or_na(artist.email.as_deref())) }
                }
                span class=(format!("badge {}", status_tone(artist).css_class())) {
                    (status_label(artist))
                }
            }
            dl {
                dt { "Especialidades:" }
                dd { (specialties_display(artist)) }
                dt { "Telefone:" }
                dd { (display_or_na(artist.phone.as_deref())) }
                dt { "Avaliação:" }
                dd { "⭐ " (rating_display(artist)) }
                dt { "Estilo:" }
                dd { (display_or_na(artist.style.as_deref())) }
            }
            footer {
                button.outline type="button" disabled { "Ver Portfólio" }
                button.primary type="button" disabled { "Editar" }
            }
        }
    }
}
