//! Practice sentences, grouped by proficiency level.

use serde::Serialize;

use super::Level;
use super::Level::{Advanced, Beginner, Intermediate};

/// A sentence the learner reads aloud, with its Portuguese translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PracticeText {
    pub id: u32,
    pub level: Level,
    pub text: &'static str,
    pub translation: &'static str,
}

const fn text(
    id: u32,
    level: Level,
    text: &'static str,
    translation: &'static str,
) -> PracticeText {
    PracticeText {
        id,
        level,
        text,
        translation,
    }
}

/// The full practice catalog, ordered by id.
pub static PRACTICE_TEXTS: &[PracticeText] = &[
    text(1, Beginner, "Hello, my name is Sarah.", "Olá, meu nome é Sarah."),
    text(2, Beginner, "I like to read books.", "Eu gosto de ler livros."),
    text(3, Beginner, "The weather is beautiful today.", "O tempo está lindo hoje."),
    text(4, Beginner, "Nice to meet you.", "Prazer em conhecê-lo."),
    text(5, Beginner, "How are you today?", "Como você está hoje?"),
    text(6, Beginner, "I am from Brazil.", "Sou do Brasil."),
    text(7, Beginner, "What is your name?", "Qual é o seu nome?"),
    text(8, Beginner, "I speak English and Portuguese.", "Falo inglês e português."),
    text(9, Beginner, "Do you like pizza?", "Você gosta de pizza?"),
    text(10, Beginner, "I have a cat and a dog.", "Tenho um gato e um cachorro."),
    text(11, Beginner, "Where do you live?", "Onde você mora?"),
    text(12, Beginner, "The sun is shining today.", "O sol está brilhando hoje."),
    text(13, Beginner, "I like coffee in the morning.", "Gosto de café pela manhã."),
    text(14, Beginner, "What time is it?", "Que horas são?"),
    text(15, Beginner, "I study English every day.", "Estudo inglês todos os dias."),
    text(16, Beginner, "Can you help me please?", "Você pode me ajudar, por favor?"),
    text(17, Beginner, "I am happy today.", "Estou feliz hoje."),
    text(18, Beginner, "Do you have a sister?", "Você tem uma irmã?"),
    text(19, Beginner, "I like playing soccer.", "Gosto de jogar futebol."),
    text(20, Beginner, "The book is on the table.", "O livro está na mesa."),
    text(21, Beginner, "I go to school on Monday.", "Vou para a escola na segunda-feira."),
    text(22, Beginner, "She has blue eyes.", "Ela tem olhos azuis."),
    text(23, Beginner, "My favorite color is red.", "Minha cor favorita é vermelha."),
    text(24, Beginner, "I eat breakfast at seven.", "Como café da manhã às sete."),
    text(25, Beginner, "Do you like music?", "Você gosta de música?"),
    text(26, Beginner, "I am learning English.", "Estou aprendendo inglês."),
    text(27, Beginner, "What is your job?", "Qual é o seu trabalho?"),
    text(28, Beginner, "I work in an office.", "Trabalho em um escritório."),
    text(29, Beginner, "The milk is cold.", "O leite está frio."),
    text(30, Beginner, "I like watching movies.", "Gosto de assistir filmes."),
    text(31, Beginner, "Where is the bathroom?", "Onde fica o banheiro?"),
    text(32, Beginner, "I have brown hair.", "Tenho cabelo marrom."),
    text(33, Beginner, "Do you speak Spanish?", "Você fala espanhol?"),
    text(34, Beginner, "I like ice cream.", "Gosto de sorvete."),
    text(35, Beginner, "The car is fast.", "O carro é rápido."),
    text(36, Beginner, "I go to the gym on Tuesday.", "Vou à academia na terça-feira."),
    text(37, Beginner, "My friend is very kind.", "Meu amigo é muito gentil."),
    text(38, Beginner, "I have a phone and a laptop.", "Tenho um telefone e um laptop."),
    text(39, Beginner, "The sky is blue.", "O céu é azul."),
    text(40, Beginner, "I sleep eight hours.", "Durmo oito horas."),
    text(41, Intermediate, "I have been learning English for three years.", "Tenho estudado inglês há três anos."),
    text(42, Intermediate, "She works as a software developer in a tech company.", "Ela trabalha como desenvolvedora de software em uma empresa de tecnologia."),
    text(43, Intermediate, "If I had more time, I would travel around the world.", "Se eu tivesse mais tempo, viajaria ao redor do mundo."),
    text(44, Intermediate, "The meeting was postponed because of the weather.", "A reunião foi adiada por causa do clima."),
    text(45, Intermediate, "I am interested in learning about different cultures.", "Tenho interesse em aprender sobre diferentes culturas."),
    text(46, Intermediate, "She suggested that we should visit the museum on Saturday.", "Ela sugeriu que devêssemos visitar o museu no sábado."),
    text(47, Intermediate, "I would appreciate it if you could send me the files.", "Eu agradeceria se você pudesse me enviar os arquivos."),
    text(48, Intermediate, "The project requires more research and planning.", "O projeto requer mais pesquisa e planejamento."),
    text(49, Intermediate, "Although it was raining, we went to the beach.", "Embora estivesse chovendo, fomos à praia."),
    text(50, Intermediate, "I have already finished my homework.", "Já terminei meu dever de casa."),
    text(51, Intermediate, "She is considering changing jobs next year.", "Ela está considerando trocar de emprego no próximo ano."),
    text(52, Intermediate, "The new restaurant serves excellent Italian food.", "O novo restaurante serve excelente comida italiana."),
    text(53, Intermediate, "I am looking forward to the concert next month.", "Estou ansioso para o concerto no próximo mês."),
    text(54, Intermediate, "He apologized for being late to the meeting.", "Ele pediu desculpas por chegar atrasado à reunião."),
    text(55, Intermediate, "Despite the challenges, the team managed to complete the project.", "Apesar dos desafios, a equipe conseguiu completar o projeto."),
    text(56, Intermediate, "I prefer to work in a quiet environment.", "Prefiro trabalhar em um ambiente tranquilo."),
    text(57, Intermediate, "She has a talent for playing the piano.", "Ela tem talento para tocar piano."),
    text(58, Intermediate, "The book I read last week was fascinating.", "O livro que li na semana passada foi fascinante."),
    text(59, Intermediate, "I am thinking of taking a cooking class.", "Estou pensando em fazer um curso de culinária."),
    text(60, Intermediate, "It is important to maintain a healthy lifestyle.", "É importante manter um estilo de vida saudável."),
    text(61, Intermediate, "The company announced a new product launch.", "A empresa anunciou o lançamento de um novo produto."),
    text(62, Intermediate, "I would like to improve my communication skills.", "Gostaria de melhorar minhas habilidades de comunicação."),
    text(63, Intermediate, "She has been to more than twenty countries.", "Ela esteve em mais de vinte países."),
    text(64, Intermediate, "The weather forecast predicts rain tomorrow.", "A previsão do tempo prevê chuva amanhã."),
    text(65, Intermediate, "I have never tried sushi before.", "Nunca tinha experimentado sushi antes."),
    text(66, Intermediate, "She managed to solve the problem quickly.", "Ela conseguiu resolver o problema rapidamente."),
    text(67, Intermediate, "The article discusses the importance of education.", "O artigo discute a importância da educação."),
    text(68, Intermediate, "I am confident that the team will succeed.", "Tenho confiança de que o time terá sucesso."),
    text(69, Intermediate, "He recommended that we visit this restaurant.", "Ele recomendou que visitássemos este restaurante."),
    text(70, Intermediate, "The conference will take place in March.", "A conferência ocorrerá em março."),
    text(71, Intermediate, "I have been practicing English for months.", "Tenho praticado inglês por meses."),
    text(72, Intermediate, "She is excited about the new opportunity.", "Ela está animada sobre a nova oportunidade."),
    text(73, Intermediate, "The film was well received by critics.", "O filme foi bem recebido pelos críticos."),
    text(74, Intermediate, "I found the documentary very informative.", "Achei o documentário muito informativo."),
    text(75, Intermediate, "She prefers tea to coffee in the afternoon.", "Ela prefere chá ao café à tarde."),
    text(76, Intermediate, "The museum is closed on Mondays.", "O museu está fechado nas segundas-feiras."),
    text(77, Intermediate, "I appreciate your help with the project.", "Agradeço sua ajuda no projeto."),
    text(78, Intermediate, "She has been working there for five years.", "Ela tem trabalhado lá há cinco anos."),
    text(79, Intermediate, "The presentation was informative and interesting.", "A apresentação foi informativa e interessante."),
    text(80, Intermediate, "I think we should schedule a meeting next week.", "Acho que devemos agendar uma reunião na próxima semana."),
    text(81, Advanced, "The technological advancements have revolutionized communication.", "Os avanços tecnológicos revolucionaram a comunicação."),
    text(82, Advanced, "Notwithstanding the economic downturn, the company maintained profitability.", "Apesar da recessão econômica, a empresa manteve lucratividade."),
    text(83, Advanced, "The paradigm shift in renewable energy has profound implications.", "A mudança de paradigma em energia renovável tem implicações profundas."),
    text(84, Advanced, "Consequently, we must reconsider our strategic approach to sustainability.", "Consequentemente, devemos reconsiderar nossa abordagem estratégica para sustentabilidade."),
    text(85, Advanced, "The multifaceted nature of this issue demands comprehensive analysis.", "A natureza multifacetada deste problema exige análise abrangente."),
    text(86, Advanced, "Furthermore, the implementation of artificial intelligence presents unprecedented challenges.", "Além disso, a implementação da inteligência artificial apresenta desafios sem precedentes."),
    text(87, Advanced, "The correlation between climate change and economic development cannot be ignored.", "A correlação entre mudança climática e desenvolvimento econômico não pode ser ignorada."),
    text(88, Advanced, "In light of recent developments, we must reassess our organizational structure.", "À luz dos desenvolvimentos recentes, devemos reavaliar nossa estrutura organizacional."),
    text(89, Advanced, "The intellectual discourse surrounding globalization remains contentious.", "O discurso intelectual em torno da globalização permanece controverso."),
    text(90, Advanced, "Inherent to this argument is the assumption that progress is measurable.", "Inerente a este argumento está a suposição de que o progresso é mensurável."),
    text(91, Advanced, "The complexities of international diplomacy require sophisticated negotiation skills.", "As complexidades da diplomacia internacional exigem habilidades de negociação sofisticadas."),
    text(92, Advanced, "Predicated upon rigorous research, our conclusions are fundamentally sound.", "Baseado em pesquisa rigorosa, nossas conclusões são fundamentalmente sólidas."),
    text(93, Advanced, "The philosophical implications of consciousness remain largely unexplored.", "As implicações filosóficas da consciência permanecem largamente inexploradas."),
    text(94, Advanced, "Notwithstanding our efforts, the project encountered insurmountable obstacles.", "Apesar de nossos esforços, o projeto encontrou obstáculos intransponíveis."),
    text(95, Advanced, "The extrapolation of data suggests unprecedented growth in emerging markets.", "A extrapolação de dados sugere crescimento sem precedentes nos mercados emergentes."),
    text(96, Advanced, "Consequently, stakeholders must navigate increasingly complex regulatory environments.", "Consequentemente, as partes interessadas devem navegar ambientes regulatórios cada vez mais complexos."),
    text(97, Advanced, "The dichotomy between theory and practice remains perpetually relevant.", "A dicotomia entre teoria e prática permanece perpetuamente relevante."),
    text(98, Advanced, "Nevertheless, the integration of innovative technologies offers substantial advantages.", "No entanto, a integração de tecnologias inovadoras oferece vantagens substanciais."),
    text(99, Advanced, "The epistemological framework underpinning our analysis merits careful examination.", "O marco epistemológico subjacente à nossa análise merece exame cuidadoso."),
    text(100, Advanced, "Henceforth, organizations must prioritize ethical considerations in business operations.", "Doravante, as organizações devem priorizar considerações éticas nas operações comerciais."),
    text(101, Advanced, "The proliferation of misinformation in digital spaces poses existential threats.", "A proliferação de desinformação em espaços digitais representa ameaças existenciais."),
    text(102, Advanced, "Arguably, the most pressing contemporary issue is environmental degradation.", "Pode-se argumentar que a questão contemporânea mais urgente é a degradação ambiental."),
    text(103, Advanced, "The homogenization of global culture presents both opportunities and risks.", "A homogeneização da cultura global apresenta tanto oportunidades quanto riscos."),
    text(104, Advanced, "Underlying this phenomenon is a complex interplay of socioeconomic factors.", "Subjacente a este fenômeno está uma interação complexa de fatores socioeconômicos."),
    text(105, Advanced, "The trajectory of human civilization suggests inevitable paradigmatic transformations.", "A trajetória da civilização humana sugere transformações paradigmáticas inevitáveis."),
    text(106, Advanced, "Notwithstanding technological advances, fundamental human needs remain unchanged.", "Apesar dos avanços tecnológicos, as necessidades humanas fundamentais permanecem inalteradas."),
    text(107, Advanced, "The confluence of multiple disciplines illuminates previously obscure phenomena.", "A confluência de múltiplas disciplinas ilumina fenômenos previamente obscuros."),
    text(108, Advanced, "Consequently, interdisciplinary approaches have become increasingly indispensable.", "Consequentemente, abordagens interdisciplinares tornaram-se cada vez mais indispensáveis."),
    text(109, Advanced, "The ontological status of abstract entities remains philosophically contentious.", "O status ontológico de entidades abstratas permanece filosoficamente controverso."),
    text(110, Advanced, "Predicated upon empirical evidence, this hypothesis demonstrates remarkable validity.", "Baseada em evidências empíricas, esta hipótese demonstra validade notável."),
    text(111, Advanced, "The ubiquity of digital technologies has fundamentally altered human interaction.", "A ubiquidade das tecnologias digitais alterou fundamentalmente a interação humana."),
    text(112, Advanced, "Nevertheless, critical analyses reveal substantial methodological limitations.", "No entanto, análises críticas revelam limitações metodológicas substanciais."),
    text(113, Advanced, "The intersection of climate science and economic policy remains contentious.", "A intersecção da ciência climática e política econômica permanece controversa."),
    text(114, Advanced, "Henceforth, cognitive science must address fundamental questions about consciousness.", "Doravante, a ciência cognitiva deve abordar questões fundamentais sobre consciência."),
    text(115, Advanced, "The hermeneutic complexities of textual interpretation demand sophisticated frameworks.", "As complexidades hermenêuticas da interpretação textual exigem marcos sofisticados."),
    text(116, Advanced, "Inherent to postmodern discourse is the deconstruction of established narratives.", "Inerente ao discurso pós-moderno está a desconstrução de narrativas estabelecidas."),
    text(117, Advanced, "The accumulation of capital has historically engendered profound social inequalities.", "O acúmulo de capital historicamente gerou profundas desigualdades sociais."),
    text(118, Advanced, "Consequently, redistributive mechanisms have become increasingly controversial in policy debates.", "Consequentemente, mecanismos redistributivos tornaram-se cada vez mais controversos em debates de política."),
    text(119, Advanced, "The phenomenological perspective offers valuable insights into subjective experience.", "A perspectiva fenomenológica oferece insights valiosos sobre a experiência subjetiva."),
    text(120, Advanced, "Nevertheless, empirical validation of phenomenological claims remains theoretically problematic.", "No entanto, a validação empírica de afirmações fenomenológicas permanece teoricamente problemática."),
];
