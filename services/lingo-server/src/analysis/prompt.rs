//! Prompt construction for pronunciation analysis.
//!
//! Prompts are written in Portuguese because feedback is shown to Brazilian
//! learners. Both ask for a bare JSON object matching the result types.

/// Build the sentence analysis prompt.
pub fn sentence_prompt(original_text: &str, transcribed_text: &str) -> String {
    format!(
        r#"Você é um professor de inglês especializado em pronúncia.

Texto original: "{original_text}"
O que o aluno falou (transcrição automática): "{transcribed_text}"

Analise a pronúncia do aluno de forma breve e objetiva:
1. Dê uma pontuação de 0 a 100
2. Liste no máximo 3 palavras pronunciadas incorretamente
3. Para cada palavra, dê uma dica de no máximo 1 linha (até 15 palavras)
4. Escreva um elogio motivador em uma frase curta
5. Escreva uma sugestão geral em uma frase curta

IMPORTANTE: seja CONCISO. Responda SOMENTE com um objeto JSON neste formato, sem texto adicional:
{{
  "score": 0,
  "incorrectWords": [
    {{
      "word": "palavra",
      "userPronounced": "como o aluno falou",
      "tip": "dica curta em 1 linha"
    }}
  ],
  "feedback": "elogio breve (1 frase)",
  "suggestions": "sugestão geral breve (1 frase)"
}}"#
    )
}

/// Build the single-word analysis prompt.
pub fn word_prompt(expected_word: &str, spoken_word: &str) -> String {
    format!(
        r#"Você é um professor de inglês avaliando a pronúncia de uma única palavra.

Palavra esperada: "{expected_word}"
O que o reconhecimento de voz captou: "{spoken_word}"

O reconhecimento de voz comete pequenos erros. Seja generoso: considere correto
quando a diferença for apenas uma pequena variação fonética ou de grafia
(por exemplo, plural, homófonos ou uma letra trocada).

Responda SOMENTE com um objeto JSON neste formato, sem texto adicional:
{{
  "isCorrect": true,
  "confidence": 0,
  "feedback": "comentário curto e motivador (1 frase)"
}}"#
    )
}
