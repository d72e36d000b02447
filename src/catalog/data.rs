//! Static catalog contents.

use super::{Camera, GlossaryTerm, Lens, Scenario};

fn camera(id: &str, brand: &str, model: &str, max_iso: u32) -> Camera {
    Camera {
        id: id.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        max_iso,
    }
}

fn lens(id: &str, name: &str, max_aperture: f64, is_zoom: bool) -> Lens {
    Lens {
        id: id.to_string(),
        name: name.to_string(),
        max_aperture,
        is_zoom,
    }
}

fn scenario(id: &str, name: &str, icon: &str, description: &str) -> Scenario {
    Scenario {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    }
}

fn term(term: &str, description: &str) -> GlossaryTerm {
    GlossaryTerm {
        term: term.to_string(),
        description: description.to_string(),
    }
}

pub(super) fn cameras() -> Vec<Camera> {
    vec![
        camera("c1", "Canon", "EOS Rebel T7", 6400),
        camera("c2", "Canon", "EOS 90D", 25600),
        camera("c3", "Canon", "EOS R6 Mark II", 102400),
        camera("c4", "Nikon", "D3500", 25600),
        camera("c5", "Nikon", "Z6 II", 51200),
        camera("c6", "Sony", "Alpha a6400", 32000),
        camera("c7", "Sony", "Alpha 7 IV", 51200),
        camera("c8", "Fujifilm", "X-T30 II", 12800),
        camera("c9", "Fujifilm", "X-T5", 12800),
        camera("c10", "Panasonic", "Lumix G9", 25600),
    ]
}

pub(super) fn lenses() -> Vec<Lens> {
    vec![
        lens("l1", "Canon EF 50mm f/1.8 STM", 1.8, false),
        lens("l2", "Sony FE 85mm f/1.8", 1.8, false),
        lens("l3", "Canon EF 70-200mm f/2.8L IS III", 2.8, true),
        lens("l4", "Canon EF-S 10-18mm f/4.5-5.6 IS STM", 4.5, true),
        lens("l5", "Nikon AF-S 16-35mm f/4G VR", 4.0, true),
        lens("l6", "Samyang 14mm f/2.8 ED AS IF UMC", 2.8, false),
        lens("l7", "Sigma 24mm f/1.4 DG HSM Art", 1.4, false),
        lens("l8", "Canon EF 100mm f/2.8L Macro IS USM", 2.8, false),
        lens("l9", "Nikon AF-S DX Micro 60mm f/2.8", 2.8, false),
        lens("l10", "Tamron 70-300mm f/4.5-6.3 Di III RXD", 4.5, true),
        lens("l11", "Nikon AF-S DX 55-200mm f/4-5.6G ED VR II", 4.0, true),
        lens("l12", "Canon EF-S 18-55mm f/3.5-5.6 IS STM", 3.5, true),
        lens("l13", "Sony FE 24-70mm f/2.8 GM II", 2.8, true),
        lens("l14", "Fujifilm XF 35mm f/1.4 R", 1.4, false),
        lens("l15", "Nikon Z 24-120mm f/4 S", 4.0, true),
    ]
}

pub(super) fn scenarios() -> Vec<Scenario> {
    vec![
        scenario("s1", "Retrato", "👤", "Pessoas com fundo desfocado"),
        scenario("s2", "Ensaio de Casal", "💑", "Duas pessoas ao ar livre, luz natural"),
        scenario("s3", "Paisagem", "🏔️", "Cenas amplas com tudo em foco"),
        scenario("s4", "Arquitetura Urbana", "🏙️", "Prédios, linhas e perspectiva"),
        scenario("s5", "Noturna Urbana", "🌃", "Cidade à noite com luzes artificiais"),
        scenario("s6", "Astrofotografia", "🌌", "Via Láctea e céu estrelado"),
        scenario("s7", "Eventos", "🎉", "Festas e cerimônias em ambientes variados"),
        scenario("s8", "Produtos", "📦", "Objetos para catálogo ou e-commerce"),
        scenario("s9", "Macro", "🐞", "Detalhes minúsculos, insetos e flores"),
        scenario("s10", "Vida Selvagem", "🦁", "Animais à distância"),
        scenario("s11", "Esportes", "⚽", "Ação rápida e movimento"),
        scenario("s12", "Gastronomia", "🍝", "Pratos e bebidas"),
        scenario("s13", "Hora Dourada", "🌅", "Luz quente do nascer ou pôr do sol"),
        scenario("s14", "Interiores", "🛋️", "Ambientes internos com pouca luz"),
        scenario("s15", "Crianças", "🧒", "Movimento imprevisível, expressões espontâneas"),
    ]
}

pub(super) fn glossary() -> Vec<GlossaryTerm> {
    vec![
        term(
            "Abertura (f/)",
            "Tamanho da abertura do diafragma. Números f menores deixam entrar mais luz e desfocam mais o fundo.",
        ),
        term(
            "ISO",
            "Sensibilidade do sensor à luz. Valores altos clareiam a foto, mas aumentam o ruído.",
        ),
        term(
            "Velocidade do Obturador",
            "Tempo em que o sensor fica exposto. Velocidades rápidas congelam o movimento; lentas criam rastros.",
        ),
        term(
            "Balanço de Branco",
            "Ajuste da temperatura de cor para que o branco pareça branco sob diferentes fontes de luz.",
        ),
        term(
            "AF-S / AF-C",
            "Foco único (trava ao focar) ou contínuo (acompanha o assunto em movimento).",
        ),
        term(
            "Medição",
            "Forma como a câmera avalia a luz da cena: matricial, ponderada ao centro ou pontual.",
        ),
        term(
            "Profundidade de Campo",
            "Faixa da imagem que aparece nítida. Depende da abertura, da distância e da distância focal.",
        ),
        term(
            "Regra dos Terços",
            "Divide o quadro em 3x3 e posiciona os elementos principais nas linhas ou interseções.",
        ),
        term(
            "Modo Manual (M)",
            "O fotógrafo define abertura, obturador e ISO manualmente.",
        ),
        term(
            "Prioridade de Abertura (A/Av)",
            "Você escolhe a abertura e a câmera ajusta a velocidade do obturador.",
        ),
    ]
}
