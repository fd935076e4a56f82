//! Page renderers. Each page draws purely from its view-model state and
//! reports outgoing navigation through the `nav` out-parameter; data loads
//! are issued by the shell when a page is mounted, never from here.

use egui::{Color32, RichText};

use client_core::view::{ContactForm, ContactPhase, DetailState, ListState};
use shared::domain::{Article, ArticleCategory, Book, ContactSubmission, NewsPost};

use crate::ui::format::format_date_pt_br;

const WINE: Color32 = Color32::from_rgb(0x4b, 0x1e, 0x2f);
const GOLD: Color32 = Color32::from_rgb(0xc9, 0xa2, 0x27);

fn page_title(ui: &mut egui::Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(text).size(28.0).strong().color(WINE));
    ui.add_space(8.0);
}

fn loading(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label("Carregando...");
    });
}

fn empty_state(ui: &mut egui::Ui, message: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(message).color(WINE));
}

fn news_card(ui: &mut egui::Ui, post: &NewsPost, nav: &mut Option<String>) {
    ui.group(|ui| {
        ui.label(format_date_pt_br(post.published_at));
        ui.label(RichText::new(&post.title).size(18.0).strong().color(WINE));
        if let Some(summary) = &post.summary {
            ui.label(summary);
        }
        if ui
            .button(RichText::new("Ler mais →").color(GOLD))
            .clicked()
        {
            *nav = Some(format!("/noticias/{}", post.slug));
        }
    });
    ui.add_space(8.0);
}

pub fn home(ui: &mut egui::Ui, latest: &ListState<NewsPost>, nav: &mut Option<String>) {
    ui.add_space(16.0);
    ui.vertical_centered(|ui| {
        ui.label(RichText::new("Lizzie Oliver").size(36.0).strong().color(GOLD));
        ui.label("Escritora de Fantasia – Semifinalista do Prêmio Jabuti");
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if ui.button("Entre aqui").clicked() {
                *nav = Some("/".to_string());
            }
            if ui.button("Leitores Jovens").clicked() {
                *nav = Some("/leitores-jovens".to_string());
            }
        });
    });

    ui.add_space(16.0);
    ui.separator();
    page_title(ui, "Últimas Notícias");
    match latest {
        ListState::Loading => loading(ui),
        ListState::Loaded(rows) if rows.is_empty() => {
            empty_state(ui, "Nenhuma notícia publicada ainda.");
        }
        ListState::Loaded(rows) => {
            for post in rows {
                news_card(ui, post, nav);
            }
            if ui.button("Ver todas as notícias").clicked() {
                *nav = Some("/noticias".to_string());
            }
        }
    }

    ui.add_space(16.0);
    ui.separator();
    page_title(ui, "RHOARS – Os Magiciens");
    ui.label(
        "Descubra o universo mágico de RHOARS – Os Magiciens, obra de fantasia nacional que \
         conquistou leitores e levou Lizzie Oliver às semifinais do Prêmio Jabuti.",
    );
    ui.add_space(4.0);
    ui.label(
        "Uma história envolvente que mistura magia, aventura e personagens inesquecíveis em um \
         mundo único criado pela imaginação de uma das mais promissoras escritoras de fantasia \
         do Brasil.",
    );
    ui.add_space(8.0);
    if ui.button("Conheça o livro").clicked() {
        *nav = Some("/livros/rhoars-os-magiciens".to_string());
    }
}

pub fn news_list(ui: &mut egui::Ui, state: &ListState<NewsPost>, nav: &mut Option<String>) {
    page_title(ui, "Notícias");
    match state {
        ListState::Loading => loading(ui),
        ListState::Loaded(rows) if rows.is_empty() => {
            empty_state(ui, "Nenhuma notícia publicada ainda.");
        }
        ListState::Loaded(rows) => {
            for post in rows {
                news_card(ui, post, nav);
            }
        }
    }
}

pub fn news_detail(ui: &mut egui::Ui, state: &DetailState<NewsPost>, nav: &mut Option<String>) {
    ui.add_space(12.0);
    match state {
        DetailState::Loading => loading(ui),
        DetailState::NotFound => {
            empty_state(ui, "Notícia não encontrada.");
            if ui.button("← Voltar para notícias").clicked() {
                *nav = Some("/noticias".to_string());
            }
        }
        DetailState::Found(post) => {
            if ui.button("← Voltar para notícias").clicked() {
                *nav = Some("/noticias".to_string());
            }
            ui.add_space(8.0);
            ui.label(format_date_pt_br(post.published_at));
            ui.label(RichText::new(&post.title).size(26.0).strong().color(WINE));
            ui.separator();
            for paragraph in post.content.split('\n') {
                ui.label(paragraph);
                ui.add_space(4.0);
            }
        }
    }
}

pub fn article_list(
    ui: &mut egui::Ui,
    category: ArticleCategory,
    state: &ListState<Article>,
    nav: &mut Option<String>,
) {
    page_title(ui, category.title());
    match state {
        ListState::Loading => loading(ui),
        ListState::Loaded(rows) if rows.is_empty() => {
            empty_state(ui, "Nenhum texto publicado ainda.");
        }
        ListState::Loaded(rows) => {
            for article in rows {
                ui.group(|ui| {
                    ui.label(format_date_pt_br(article.published_at));
                    ui.label(RichText::new(&article.title).size(18.0).strong().color(WINE));
                    if let Some(summary) = &article.summary {
                        ui.label(summary);
                    }
                    if ui
                        .button(RichText::new("Ler mais →").color(GOLD))
                        .clicked()
                    {
                        *nav = Some(format!(
                            "{}/{}",
                            client_core::nav::category_list_path(category),
                            article.slug
                        ));
                    }
                });
                ui.add_space(8.0);
            }
        }
    }
}

pub fn books(ui: &mut egui::Ui, state: &ListState<Book>) {
    page_title(ui, "Livros");
    match state {
        ListState::Loading => loading(ui),
        ListState::Loaded(rows) if rows.is_empty() => {
            empty_state(ui, "Nenhum livro cadastrado ainda.");
        }
        ListState::Loaded(rows) => {
            for book in rows {
                ui.group(|ui| {
                    ui.label(RichText::new(&book.title).size(22.0).strong().color(WINE));
                    if let Some(year) = book.published_year {
                        ui.label(format!("Publicado em {year}"));
                    }
                    ui.separator();
                    ui.label(&book.description);
                    if let Some(full) = &book.full_description {
                        ui.add_space(4.0);
                        for paragraph in full.split('\n') {
                            ui.label(paragraph);
                        }
                    }
                    if let Some(links) = &book.purchase_links {
                        if !links.is_empty() {
                            ui.add_space(8.0);
                            ui.label(RichText::new("Onde comprar:").strong().color(WINE));
                            ui.horizontal_wrapped(|ui| {
                                for (platform, url) in links {
                                    ui.hyperlink_to(platform, url);
                                }
                            });
                        }
                    }
                });
                ui.add_space(12.0);
            }
        }
    }
}

pub fn about(ui: &mut egui::Ui) {
    page_title(ui, "Sobre Lizzie Oliver");

    ui.label(RichText::new("Biografia").size(20.0).strong().color(WINE));
    ui.separator();
    ui.label(
        "Lizzie Oliver é uma escritora de fantasia nacional, semifinalista do Prêmio Jabuti, \
         reconhecida por seu estilo inovador e profundo.",
    );
    ui.add_space(4.0);
    ui.label(
        "Com uma habilidade única para criar mundos mágicos e personagens complexos, Lizzie \
         conquistou um lugar de destaque na literatura fantástica brasileira. Sua obra prima, \
         RHOARS – Os Magiciens, representa o início de uma saga envolvente que mistura elementos \
         clássicos da fantasia com uma perspectiva contemporânea e autenticamente brasileira.",
    );
    ui.add_space(4.0);
    ui.label(
        "Através de sua escrita, Lizzie Oliver transporta os leitores para universos onde a \
         magia se entrelaça com questões profundamente humanas, criando narrativas que ressoam \
         tanto com leitores jovens quanto adultos.",
    );

    ui.add_space(16.0);
    ui.label(RichText::new("Reconhecimento").size(20.0).strong().color(WINE));
    ui.separator();
    ui.label(
        "O trabalho de Lizzie Oliver tem sido amplamente reconhecido no cenário literário \
         nacional. Como semifinalista do prestigiado Prêmio Jabuti, uma das mais importantes \
         premiações literárias do Brasil, sua obra demonstra excelência técnica e criativa.",
    );
    ui.add_space(4.0);
    ui.label(
        "Além do reconhecimento crítico, Lizzie mantém presença ativa em feiras literárias e \
         eventos culturais, onde compartilha sua paixão pela escrita e pela fantasia com \
         leitores e aspirantes a escritores.",
    );

    ui.add_space(16.0);
    ui.label(
        RichText::new(
            "\"A fantasia nos permite explorar verdades profundas através de mundos \
             imaginários, revelando aspectos da natureza humana que muitas vezes permanecem \
             ocultos na realidade cotidiana.\"",
        )
        .italics(),
    );
    ui.label(RichText::new("— Lizzie Oliver").strong());
}

/// Renders the contact page and returns a payload when the user submitted
/// the form this frame.
pub fn contact(ui: &mut egui::Ui, form: &mut ContactForm) -> Option<ContactSubmission> {
    page_title(ui, "Contato");
    ui.label("Entre em contato para dúvidas, sugestões ou parcerias.");
    ui.add_space(12.0);

    if form.phase() == &ContactPhase::Submitted {
        ui.label(
            RichText::new("Mensagem enviada com sucesso!")
                .size(20.0)
                .strong()
                .color(GOLD),
        );
        ui.label("Obrigada por entrar em contato. Responderei em breve.");
        ui.add_space(8.0);
        if ui.button("Enviar nova mensagem").clicked() {
            form.reset();
        }
        return None;
    }

    ui.label(RichText::new("Nome").strong().color(WINE));
    ui.add(
        egui::TextEdit::singleline(&mut form.name)
            .hint_text("Seu nome completo")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
    ui.label(RichText::new("Email").strong().color(WINE));
    ui.add(
        egui::TextEdit::singleline(&mut form.email)
            .hint_text("seu.email@exemplo.com")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(6.0);
    ui.label(RichText::new("Mensagem").strong().color(WINE));
    ui.add(
        egui::TextEdit::multiline(&mut form.message)
            .hint_text("Escreva sua mensagem aqui...")
            .desired_rows(6)
            .desired_width(f32::INFINITY),
    );

    if let ContactPhase::Failed(message) = form.phase() {
        ui.add_space(6.0);
        ui.colored_label(Color32::from_rgb(0xb9, 0x1c, 0x1c), message);
    }

    ui.add_space(10.0);
    let label = if form.is_sending() {
        "Enviando..."
    } else {
        "Enviar mensagem"
    };
    let clicked = ui
        .add_enabled(!form.is_sending(), egui::Button::new(label))
        .clicked();

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.label("Você também pode me encontrar em:");
        ui.hyperlink_to(
            "Instagram: @lizzieolivervs",
            "https://instagram.com/lizzieolivervs",
        );
    });

    if clicked {
        form.submit()
    } else {
        None
    }
}
