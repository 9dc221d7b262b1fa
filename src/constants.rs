// UI strings. The product speaks Portuguese; code and logs stay in English.

pub const APP_TITLE: &str = "🌿 Carbonito";
pub const APP_SUBTITLE: &str = "Mercado de Carbono no Pantanal";

pub const INPUT_PLACEHOLDER: &str = "Pergunte ao Carbonito...";
pub const TYPING_STATUS: &str = "Carbonito está digitando";

pub const DISCLAIMER: &str =
    "O Carbonito pode cometer erros. Por isso, é bom checar as respostas. \
     Feito no curso de Direito - UEMS/Aquidauana";

pub const WELCOME_GREETING: &str =
    "Olá! Sou o Carbonito, seu especialista em legislação ambiental, \
     Pantanal e mercado de carbono.";

pub const SUGGESTED_QUESTIONS: [&str; 3] = [
    "O que é carbono e por que estão pagando por isso?",
    "Sou produtor, e agora? Posso entrar nesse mercado?",
    "O Pantanal vale mais preservado?",
];

pub const ABOUT: &str = "\
## 🌿 Sobre o Projeto Carbonito

Este projeto foi desenvolvido pelos alunos do curso de **Direito** da \
**UEMS — Universidade Estadual de Mato Grosso do Sul, unidade de Aquidauana**, \
para o **Pantanal Tech 2025**.

Nosso objetivo é aproximar produtores rurais, estudantes e o público em geral \
do tema **Mercado de Carbono** e da legislação ambiental brasileira, com foco \
especial no **Pantanal**.

### 💡 Como funciona:

1. Você faz uma pergunta sobre **carbono, legislação ambiental ou o Pantanal**.
2. O chatbot **Carbonito** busca informações em documentos oficiais, leis e pesquisas locais.
3. Ele responde de forma acessível e responsável.

### 📦 Open Source

Este projeto é **100% open source**. Acreditamos no conhecimento aberto como \
ferramenta de transformação social e acadêmica.

---

**⚠️ Obs.:** As respostas do Carbonito são baseadas em documentos de referência \
e podem conter limitações. Consulte sempre um profissional especializado para \
decisões jurídicas.
";
