//! Seed conversation threads and counterparty metadata.
//!
//! DESIGN
//! ======
//! `thread_for` models a fetch-by-conversation-identifier contract: the
//! screen receives an already-resolved, oldest-first message sequence plus
//! the header metadata for the counterparty. The problem id is opaque — it
//! selects the thread and is otherwise uninterpreted.

#[cfg(test)]
#[path = "threads_test.rs"]
mod threads_test;

use crate::state::conversation::{Message, Sender, TODAY_LABEL};

const COMPANY_NAME: &str = "AgroBrasil Pecuária";
const COMPANY_AVATAR: &str = "/agro-company-logo.jpg";
const RESEARCHER_NAME: &str = "Dr. João Silva";
const RESEARCHER_AVATAR: &str = "/placeholder.svg?height=40&width=40";

/// Counterparty metadata plus the resolved seed messages for one thread.
#[derive(Clone, Debug, PartialEq)]
pub struct Thread {
    pub problem_id: String,
    pub company_name: String,
    pub company_avatar: String,
    pub problem_title: String,
    pub messages: Vec<Message>,
}

/// Fixed identity used to attribute locally appended messages.
///
/// A real deployment sources this from the authenticated session; the
/// screen only needs a name and avatar for the researcher role.
#[derive(Clone, Copy, Debug)]
pub struct LocalIdentity {
    pub name: &'static str,
    pub avatar: &'static str,
}

pub fn local_identity() -> LocalIdentity {
    LocalIdentity {
        name: RESEARCHER_NAME,
        avatar: RESEARCHER_AVATAR,
    }
}

/// Resolves the seed thread for a problem id.
///
/// Only the AgroBrasil thread exists in this slice, so every id resolves to
/// it; the id is echoed back so header and route stay consistent.
pub fn thread_for(problem_id: &str) -> Thread {
    let mut thread = agrobrasil_thread();
    thread.problem_id = problem_id.to_owned();
    thread
}

fn company_message(id: usize, body: &str, timestamp: &str) -> Message {
    Message {
        id,
        sender: Sender::Company,
        sender_name: COMPANY_NAME.to_owned(),
        avatar: COMPANY_AVATAR.to_owned(),
        body: body.to_owned(),
        timestamp: timestamp.to_owned(),
        date: TODAY_LABEL.to_owned(),
    }
}

fn researcher_message(id: usize, body: &str, timestamp: &str) -> Message {
    Message {
        id,
        sender: Sender::Researcher,
        sender_name: RESEARCHER_NAME.to_owned(),
        avatar: RESEARCHER_AVATAR.to_owned(),
        body: body.to_owned(),
        timestamp: timestamp.to_owned(),
        date: TODAY_LABEL.to_owned(),
    }
}

fn agrobrasil_thread() -> Thread {
    Thread {
        problem_id: String::new(),
        company_name: COMPANY_NAME.to_owned(),
        company_avatar: COMPANY_AVATAR.to_owned(),
        problem_title: "Controle por Spray para Vermes do Gado".to_owned(),
        messages: vec![
            company_message(
                1,
                "Olá! Obrigado pelo interesse no nosso problema. Você tem experiência com controle de parasitas?",
                "10:30",
            ),
            researcher_message(
                2,
                "Sim, tenho 8 anos de experiência em parasitologia veterinária. Trabalhei em projetos similares na UFRGS.",
                "10:35",
            ),
            company_message(
                3,
                "Excelente! Poderia nos contar mais sobre os métodos que você utilizou nesses projetos?",
                "10:40",
            ),
            researcher_message(
                4,
                "Claro! Desenvolvi um sistema de aplicação por spray usando nanopartículas que aumentou a eficácia em 40% comparado aos métodos tradicionais. Posso enviar o paper publicado.",
                "10:45",
            ),
            company_message(
                5,
                "Isso seria ótimo! Estamos muito interessados. Quando você estaria disponível para uma reunião mais detalhada?",
                "10:50",
            ),
        ],
    }
}
